//! Fixed lexical vocabulary.
//!
//! Three read-only tables define the toy language:
//! 1. **Keywords**: reserved identifiers, resolved after an identifier run
//!    has been scanned
//! 2. **Operators**: tried in declared order with prefix matching, so
//!    every two-character operator precedes its one-character prefix
//! 3. **Punctuation**: single-character delimiters
//!
//! The tables are closed: there is no way to extend them at runtime.

/// Reserved words, in the order the guide lists them.
pub const KEYWORDS: &[&str] = &[
    "int", "float", "double", "char", "if", "else", "for", "while", "return", "void", "main",
    "print", "string",
];

/// Operators in match order.
///
/// The scanner takes the first entry that prefixes the remaining input, so
/// `>=` must come before `>` and `==` before `=`.
pub const OPERATORS: &[&str] = &[
    ">=", "<=", "==", "!=", "&&", "||", "+", "-", "*", "/", "=", ">", "<",
];

/// Single-character punctuation.
pub const PUNCTUATION: &[char] = &['(', ')', '{', '}', ';', ',', '[', ']'];

/// Check whether an identifier run is a reserved keyword.
///
/// Uses length-bucketing for fast rejection: identifiers whose length falls
/// outside the 2-6 range are rejected without any comparison.
#[inline]
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => text == "if",
        3 => matches!(text, "int" | "for"),
        4 => matches!(text, "char" | "else" | "void" | "main"),
        5 => matches!(text, "float" | "while" | "print"),
        6 => matches!(text, "double" | "return" | "string"),
        _ => false,
    }
}

/// Whitespace skipped between tokens.
///
/// Unicode `White_Space` plus the byte-order mark, minus U+0085 (next
/// line). A file saved with a leading BOM scans the same as one without.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Find the operator at the start of `rest`.
///
/// Returns the first entry of [`OPERATORS`] that is a prefix of `rest`.
#[inline]
pub fn match_operator(rest: &str) -> Option<&'static str> {
    OPERATORS.iter().copied().find(|op| rest.starts_with(op))
}

/// Check whether `c` is a punctuation character.
#[inline]
pub fn is_punctuation(c: char) -> bool {
    matches!(c, '(' | ')' | '{' | '}' | ';' | ',' | '[' | ']')
}

/// First byte of an identifier: ASCII letter or underscore.
#[inline]
pub fn is_ident_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

/// Continuation byte of an identifier: ASCII letter, digit, or underscore.
#[inline]
pub fn is_ident_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Byte of a number literal run: ASCII digit or `.`.
#[inline]
pub fn is_number_continue(byte: u8) -> bool {
    byte.is_ascii_digit() || byte == b'.'
}
