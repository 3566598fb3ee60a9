//! Error codes for every diagnostic the toolchain can report.

use std::fmt;

/// Error codes.
///
/// The first digit names the phase:
/// - E0xxx: lexer
/// - E1xxx: parser
/// - E2xxx: interpreter
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer errors (E0xxx)
    /// Character that starts no token
    E0001,

    // Parser errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Expected identifier
    E1003,
    /// `const` declaration without initializer
    E1004,
    /// Number literal that cannot be represented
    E1005,
    /// Nesting too deep
    E1006,
    /// Parameter name repeated in one function
    E1007,

    // Interpreter errors (E2xxx)
    /// Undefined variable
    E2001,
    /// Assignment to a constant
    E2002,
    /// Name declared twice in one scope
    E2003,
    /// Call of a non-function value
    E2004,
    /// Wrong number of arguments
    E2005,
    /// Assignment target is not a variable
    E2006,
    /// Computed property key is not a string
    E2007,
    /// Property access on a value that is not an object
    E2008,
    /// Call depth limit exceeded
    E2009,
}

impl ErrorCode {
    /// All error codes, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
        }
    }

    /// One-line summary of what the code means.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unrecognized character",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "expected identifier",
            ErrorCode::E1004 => "missing initializer in const declaration",
            ErrorCode::E1005 => "invalid number literal",
            ErrorCode::E1006 => "nesting too deep",
            ErrorCode::E1007 => "duplicate parameter",
            ErrorCode::E2001 => "undefined variable",
            ErrorCode::E2002 => "assignment to constant",
            ErrorCode::E2003 => "variable already declared",
            ErrorCode::E2004 => "value is not callable",
            ErrorCode::E2005 => "wrong number of arguments",
            ErrorCode::E2006 => "invalid assignment target",
            ErrorCode::E2007 => "invalid property key",
            ErrorCode::E2008 => "property access on a non-object",
            ErrorCode::E2009 => "recursion limit exceeded",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001)
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
                | ErrorCode::E1006
                | ErrorCode::E1007
        )
    }

    pub fn is_eval_error(&self) -> bool {
        !self.is_lexer_error() && !self.is_parser_error()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a code like `"E2001"`, case-insensitively.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}
