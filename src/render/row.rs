//! One listing row: icon, link, modification time.

use crate::icons::{self, IconTable};
use crate::render::escape::{attribute_value, escape_html};
use crate::types::Entry;

/// Timestamp layout: fixed-width date and time followed by the zone.
///
/// Times are held as `DateTime<FixedOffset>`, so `%Z` renders the numeric
/// offset (`+02:00`, `+00:00`), never an abbreviation such as `UTC`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Render one entry as a `<tr>` with three cells.
///
/// The link target carries the raw name (directories suffixed with `/`) and
/// the link text carries the escaped form of that same name.
pub fn render_row(table: &IconTable, entry: &Entry) -> String {
    let resolved = icons::resolve(table, entry);
    let icon = format!("\t<i class=\"fas fa-{}\"></i>", resolved.icon);
    let link = format!(
        "<a href=\"{}\">{}</a>",
        attribute_value(&resolved.display_name),
        escape_html(&resolved.display_name)
    );
    let when = entry.modified_at.format(TIMESTAMP_FORMAT);

    format!(
        "\n<tr>\n<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>",
        icon, link, when
    )
}
