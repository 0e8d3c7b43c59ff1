//! Diagnostic codes for categorizing errors and warnings.
//!
//! # Examples
//!
//! ```
//! use lexor_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` where the prefix is "E" for
/// errors or "W" for warnings and the number is zero-padded to 4 digits.
/// The 1xxx range belongs to the scanner.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use lexor_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 42);
    /// assert_eq!(code.as_str(), "E0042");
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // SCANNER ERROR CODES (E1001-E1999)
    // =========================================================================

    /// E1001: Character that starts no token
    pub const E_LEXER_UNKNOWN_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal without closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Numeric literal with more than one decimal point
    pub const E_LEXER_MALFORMED_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Character literal without closing quote
    pub const E_LEXER_UNTERMINATED_CHAR: Self = Self::new("E", 1004);
    /// E1005: Character literal with zero or several characters
    pub const E_LEXER_MALFORMED_CHAR: Self = Self::new("E", 1005);
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_code() {
        let code = DiagnosticCode::new("W", 7);
        assert_eq!(code.prefix(), "W");
        assert_eq!(code.number(), 7);
    }

    #[test]
    fn test_as_str_pads_number() {
        assert_eq!(DiagnosticCode::new("E", 5).as_str(), "E0005");
        assert_eq!(DiagnosticCode::new("E", 12345).as_str(), "E12345");
    }

    #[test]
    fn test_display_and_debug() {
        let code = DiagnosticCode::E_LEXER_MALFORMED_NUMBER;
        assert_eq!(format!("{}", code), "E1003");
        assert_eq!(format!("{:?}", code), "DiagnosticCode(E1003)");
    }

    #[test]
    fn test_scanner_codes_are_distinct() {
        let codes = [
            DiagnosticCode::E_LEXER_UNKNOWN_CHAR,
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            DiagnosticCode::E_LEXER_MALFORMED_NUMBER,
            DiagnosticCode::E_LEXER_UNTERMINATED_CHAR,
            DiagnosticCode::E_LEXER_MALFORMED_CHAR,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
