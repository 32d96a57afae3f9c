//! Hexadecimal digit strings in indexed, aligned columns.
//!
//! Numbers (decimal, `0x`-prefixed hex, or bare hex digits) are converted to
//! uppercase hex digit strings by [`parser`], laid out as structured tables by
//! [`formatting::table`] and rendered by [`formatting::render`]. Comparing
//! several numbers highlights the columns where every number has the same
//! digit. [`session`] is the interactive prompt loop.

pub mod error;
pub mod formatting;
pub mod parser;
pub mod session;

pub use error::{Error, HexAlignError, Result};
pub use formatting::{RenderStyle, Table, TableFormat, TableRenderer};
pub use parser::{parse_token, HexDigitString, NumericInput};
