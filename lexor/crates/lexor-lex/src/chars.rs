//! Character classes used by the classifier.
//!
//! Identifiers are ASCII-only. A non-ASCII letter does not start or continue
//! an identifier; it is reported as an unknown character instead.

/// Byte-order mark skipped at the very start of a source.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character can start an identifier: ASCII letter or `_`.
///
/// ```
/// use lexor_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Checks if a character can continue an identifier: ASCII letter, digit
/// or `_`.
///
/// ```
/// use lexor_lex::chars::is_ident_continue;
///
/// assert!(is_ident_continue('Z'));
/// assert!(is_ident_continue('9'));
/// assert!(!is_ident_continue('$'));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Insignificant whitespace. Line breaks are whitespace too.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Decodes the character following a backslash.
///
/// Returns `None` for an escape the language does not define; the caller
/// keeps such sequences verbatim.
pub fn unescape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        _ => None,
    }
}
