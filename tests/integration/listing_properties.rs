use chrono::{FixedOffset, TimeZone};
use proptest::prelude::*;
use static_indexes::icons::IconTable;
use static_indexes::listing::EntryLister;
use static_indexes::render::{escape_html, render_row, render_table};
use static_indexes::Entry;

use crate::integration::support::rows;

fn entry(name: &str, is_dir: bool) -> Entry {
    let ts = FixedOffset::east_opt(0)
        .unwrap()
        .with_ymd_and_hms(2020, 2, 29, 23, 59, 59)
        .unwrap();
    Entry::new(name, is_dir, ts)
}

fn unescape_attr(href: &str) -> String {
    href.replace("&#34;", "\"")
}

proptest! {
    #[test]
    fn rows_follow_sorted_filtered_names_regardless_of_input_order(
        names in prop::collection::hash_set("[.a-zA-Z0-9_ -]{1,10}", 0..24)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_shuffle(),
        include_hidden in any::<bool>(),
    ) {
        let raw: Vec<Entry> = names.iter().map(|n| entry(n, false)).collect();
        let listing = EntryLister::new(include_hidden, "index.html").list(raw);
        let table = render_table(&IconTable::default(), &listing);

        let mut expected: Vec<String> = names
            .iter()
            .filter(|n| include_hidden || !n.starts_with('.'))
            .filter(|n| n.as_str() != "index.html")
            .cloned()
            .collect();
        expected.sort();

        let rendered: Vec<String> = rows(&table).into_iter().map(|(_, h)| unescape_attr(&h)).collect();
        prop_assert_eq!(rendered, expected);
    }

    #[test]
    fn hidden_entries_never_rendered_when_excluded(
        names in prop::collection::vec("\\.?[a-z]{1,6}", 0..16),
    ) {
        let raw: Vec<Entry> = names.iter().map(|n| entry(n, n.len() % 2 == 0)).collect();
        let listing = EntryLister::new(false, "index.html").list(raw);
        let table = render_table(&IconTable::default(), &listing);

        for (_, href) in rows(&table) {
            prop_assert!(!href.starts_with('.'));
        }
    }

    #[test]
    fn link_text_is_escaped_and_target_is_raw(
        name in "[a-z<>&'\" ]{1,12}",
        is_dir in any::<bool>(),
    ) {
        let row = render_row(&IconTable::default(), &entry(&name, is_dir));
        let shown = if is_dir { format!("{}/", name) } else { name.clone() };

        let href = rows(&row).pop().map(|(_, h)| h).unwrap();
        prop_assert_eq!(unescape_attr(&href), shown.clone());
        let text_expected = format!(">{}</a>", escape_html(&shown));
        prop_assert!(row.contains(&text_expected));
    }

    #[test]
    fn unknown_extensions_use_default_icon(stem in "[a-z]{1,8}", ext in "[a-z]{5,8}") {
        let table = IconTable::default();
        let name = format!("{}.{}", stem, ext);
        let row = render_row(&table, &entry(&name, false));
        prop_assert!(row.contains("fa-file-alt"));

        let dir_row = render_row(&table, &entry(&format!("{}.jpg", stem), true));
        prop_assert!(dir_row.contains("fa-folder-open"));
    }
}
