//! Edge case tests for lexor-lex
