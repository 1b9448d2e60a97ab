use crate::TokenCategory;

/// One scanned unit, as handed over by the scanner.
///
/// Borrowed from the scanner's buffer; token construction copies what it
/// keeps.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Lexeme<'src> {
    pub category: TokenCategory,
    /// Raw text, delimiters and prefixes included.
    pub text: &'src str,
    /// 1-based source line.
    pub line: u32,
}

impl<'src> Lexeme<'src> {
    pub const fn new(category: TokenCategory, text: &'src str, line: u32) -> Self {
        Lexeme {
            category,
            text,
            line,
        }
    }
}
