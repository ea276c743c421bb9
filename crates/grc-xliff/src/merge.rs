//! Parent/child dictionary merging.

use crate::parse::Dictionary;

/// Merges an optional parent dictionary with a child dictionary; the child
/// wins on key collision.
pub fn merge_dictionaries(parent: Option<&Dictionary>, child: &Dictionary) -> Dictionary {
    let mut merged = parent.cloned().unwrap_or_default();
    merged.extend(child.iter().map(|(k, v)| (k.clone(), v.clone())));
    merged
}
