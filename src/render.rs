//! HTML rendering: rows, the listing table, and the full page.

pub mod escape;
pub mod page;
pub mod row;
pub mod table;

pub use escape::escape_html;
pub use page::{Overrides, PageComposer};
pub use row::render_row;
pub use table::render_table;
