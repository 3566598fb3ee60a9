//! Grammar productions, split by level.

mod expr;
mod postfix;
mod primary;
mod stmt;
