//! Prop maps and the layer-merging primitive.
//!
//! Props are keyed by string and hold arbitrary JSON values. Using
//! [`serde_json::Value`] rather than a type-erased map means every stored
//! prop is known to be serializable at the time it is stored.

use std::collections::{BTreeMap, BTreeSet};

/// A map of prop name to JSON value.
pub type Props = BTreeMap<String, serde_json::Value>;

/// Merge one prop layer into `target`.
///
/// A key is copied when `only` is `None` or contains it. Keys already in
/// `target` are overwritten, so later layers win.
pub fn merge_layer<'a, I>(target: &mut Props, layer: I, only: Option<&BTreeSet<String>>)
where
    I: IntoIterator<Item = (&'a String, &'a serde_json::Value)>,
{
    for (key, value) in layer {
        if only.is_none_or(|only| only.contains(key)) {
            target.insert(key.clone(), value.clone());
        }
    }
}
