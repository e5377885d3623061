use indexmap::IndexMap;
use indexmap::map::Entry;
use rustc_hash::FxBuildHasher;

use crate::model::{ApiItem, ItemKind};

type DedupKey = (String, ItemKind);

/// Collapses items sharing a `(name, kind)` pair and sorts the survivors by
/// name.
///
/// Within a group the item with the strictly longest description wins, length
/// being counted in characters; on a tie the first one seen is kept. Names
/// compare by byte value, and items with equal names keep their discovery
/// order.
pub fn deduplicate_docs(items: impl IntoIterator<Item = ApiItem>) -> Vec<ApiItem> {
    let mut unique: IndexMap<DedupKey, ApiItem, FxBuildHasher> = IndexMap::default();

    for item in items {
        match unique.entry((item.name.clone(), item.kind)) {
            Entry::Occupied(mut existing) => {
                if char_len(&existing.get().description) < char_len(&item.description) {
                    existing.insert(item);
                }
            }
            Entry::Vacant(slot) => {
                slot.insert(item);
            }
        }
    }

    let mut docs: Vec<ApiItem> = unique.into_values().collect();
    docs.sort_by(|a, b| a.name.cmp(&b.name));
    docs
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
