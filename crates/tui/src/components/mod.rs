//! Widgets composed by the picker's render pass.

mod highlight;
pub mod prompt;
pub mod rows;
pub mod tables;

pub use highlight::{TruncationStyle, highlight_cell};
pub use prompt::{PromptContext, render_prompt};
pub use rows::{ColumnWidths, build_bookmark_rows};
pub use tables::{TableSpec, column_widths, render_table};
