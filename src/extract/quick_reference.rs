use indexmap::IndexMap;

use crate::classify::ids::key_case;
use crate::constants::extract::FALLBACK_TABLE_KEY;
use crate::types::{QuickReference, Table};

/// One entry per table with at least two columns, keyed by its context
pub fn extract(tables: &[Table]) -> IndexMap<String, QuickReference> {
    let mut out = IndexMap::new();

    for table in tables.iter().filter(|t| t.headers.len() >= 2 && !t.rows.is_empty()) {
        let base = table_key(table);
        let key = unique_key(&out, base);
        out.insert(
            key,
            QuickReference {
                columns: table.headers.clone(),
                rows: table.rows.clone(),
            },
        );
    }

    out
}

fn table_key(table: &Table) -> String {
    let from_context = key_case(&table.context);
    if !from_context.is_empty() {
        return from_context;
    }
    let from_header = table.headers.first().map(|h| key_case(h)).unwrap_or_default();
    if !from_header.is_empty() {
        return format!("{}-table", from_header);
    }
    FALLBACK_TABLE_KEY.to_string()
}

/// `base`, or `base-2`, `base-3`... when already taken
fn unique_key(taken: &IndexMap<String, QuickReference>, base: String) -> String {
    if !taken.contains_key(&base) {
        return base;
    }
    (2..)
        .map(|n| format!("{}-{}", base, n))
        .find(|candidate| !taken.contains_key(candidate))
        .unwrap_or(base)
}
