//! Formatting of hex digit strings into indexed columns.
//!
//! [`table`] builds structured rows (cells plus highlight flags) and
//! [`render`] turns them into terminal text or JSON.

pub mod render;
pub mod table;

pub use render::{Highlight, RenderStyle, TableFormat, TableRenderer};
pub use table::{alignment_width, column_agreement, Cell, Row, RowKind, Table};
