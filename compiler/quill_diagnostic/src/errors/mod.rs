//! Long-form documentation for each error code, used by `quill explain`.
//!
//! The markdown files next to this module are embedded at compile time. The
//! lookup is an exhaustive match, so adding an [`ErrorCode`] without docs
//! does not build.

use crate::ErrorCode;

pub struct ErrorDocs;

impl ErrorDocs {
    /// Markdown documentation for `code`. The first line is a
    /// `# Exxxx: summary` heading.
    pub fn get(code: ErrorCode) -> &'static str {
        match code {
            ErrorCode::E0001 => include_str!("E0001.md"),
            ErrorCode::E1001 => include_str!("E1001.md"),
            ErrorCode::E1002 => include_str!("E1002.md"),
            ErrorCode::E1003 => include_str!("E1003.md"),
            ErrorCode::E1004 => include_str!("E1004.md"),
            ErrorCode::E1005 => include_str!("E1005.md"),
            ErrorCode::E1006 => include_str!("E1006.md"),
            ErrorCode::E1007 => include_str!("E1007.md"),
            ErrorCode::E2001 => include_str!("E2001.md"),
            ErrorCode::E2002 => include_str!("E2002.md"),
            ErrorCode::E2003 => include_str!("E2003.md"),
            ErrorCode::E2004 => include_str!("E2004.md"),
            ErrorCode::E2005 => include_str!("E2005.md"),
            ErrorCode::E2006 => include_str!("E2006.md"),
            ErrorCode::E2007 => include_str!("E2007.md"),
            ErrorCode::E2008 => include_str!("E2008.md"),
            ErrorCode::E2009 => include_str!("E2009.md"),
        }
    }
}

#[cfg(test)]
mod tests;
