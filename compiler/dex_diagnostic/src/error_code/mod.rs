//! Error codes for all interpreter diagnostics.
//!
//! Format: E#### where the first digit is the phase:
//! - E1xxx: Parse errors
//! - E6xxx: Evaluation errors

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Parse Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Empty literal body
    E1002,
    /// Unterminated function map entry
    E1003,
    /// Stream to undefined function
    E1004,
    /// Rebinding an already bound name
    E1005,

    // Eval Errors (E6xxx)
    /// Dispatch map evaluated without an argument
    E6001,
    /// Dispatch argument evaluated to nothing
    E6002,
    /// Native function failed
    E6003,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E6001,
        ErrorCode::E6002,
        ErrorCode::E6003,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
        }
    }

    /// One-line summary, used as the fallback message.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "literals can not be empty",
            ErrorCode::E1003 => "unterminated function map entry",
            ErrorCode::E1004 => "stream to undefined function",
            ErrorCode::E1005 => "attempt to rebind a name",
            ErrorCode::E6001 => "function map called without arguments",
            ErrorCode::E6002 => "function map argument evaluated to nothing",
            ErrorCode::E6003 => "native function failed",
        }
    }

    pub fn is_parse_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    pub fn is_eval_error(&self) -> bool {
        self.as_str().starts_with("E6")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
