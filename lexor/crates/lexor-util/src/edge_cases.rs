//! Edge case tests for lexor-util
