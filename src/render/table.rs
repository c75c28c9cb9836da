//! Listing table assembly.

use crate::icons::IconTable;
use crate::listing::DirectoryListing;
use crate::render::row::render_row;

const TABLE_OPEN: &str = "<table class=\"sortable\">
\t<thead>
\t\t<tr>
\t\t\t<th class=\"no-sort\"></th>
\t\t\t<th>Name</th>
\t\t\t<th>Date</th>
\t\t</tr>
\t</thead>
\t<tbody>
";

/// Spacer row closing every table, followed by the closing tags.
const TABLE_CLOSE: &str = "
\t\t<tr>
\t\t\t<td></td>
\t\t</tr>
\t</tbody>
</table>";

/// Render the listing as a sortable three-column table.
///
/// Rows follow the listing order; one empty spacer row is always appended.
pub fn render_table(icons: &IconTable, listing: &DirectoryListing) -> String {
    let mut out = String::from(TABLE_OPEN);
    for entry in listing.iter() {
        out.push_str(&render_row(icons, entry));
    }
    out.push_str(TABLE_CLOSE);
    out
}
