//! Pure helpers that compute the next collection for a replace action.
//!
//! Add/update/remove are expressed as "compute the new sequence, then
//! dispatch the replace action for that collection".

use crate::model::entry::Entry;

/// Returns `entries` with `entry` appended.
pub fn with_added<T: Entry>(entries: &[T], entry: T) -> Vec<T> {
    let mut next = entries.to_vec();
    next.push(entry);
    next
}

/// Returns `entries` with a blank entry appended, plus the new entry id.
pub fn with_blank<T: Entry>(entries: &[T]) -> (Vec<T>, String) {
    let entry = T::blank();
    let id = entry.id().to_string();
    (with_added(entries, entry), id)
}

/// Returns `entries` where the entry with `id` is replaced by `edit(entry)`.
///
/// The entry id is preserved even if `edit` changes it. Unknown ids leave the
/// sequence unchanged.
pub fn with_updated<T: Entry>(entries: &[T], id: &str, edit: impl FnOnce(&mut T)) -> Vec<T> {
    let mut next = entries.to_vec();
    if let Some(entry) = next.iter_mut().find(|entry| entry.id() == id) {
        let original_id = entry.id().to_string();
        edit(entry);
        entry.set_id(original_id);
    }
    next
}

/// Returns `entries` without the entry identified by `id`.
///
/// Removing the last entry yields an empty sequence.
pub fn without<T: Entry>(entries: &[T], id: &str) -> Vec<T> {
    entries
        .iter()
        .filter(|entry| entry.id() != id)
        .cloned()
        .collect()
}

/// Returns `entries` with the entry `id` moved to `target_index` (clamped).
pub fn with_moved<T: Entry>(entries: &[T], id: &str, target_index: usize) -> Vec<T> {
    let mut next = entries.to_vec();
    let Some(from) = next.iter().position(|entry| entry.id() == id) else {
        return next;
    };
    let entry = next.remove(from);
    let target = target_index.min(next.len());
    next.insert(target, entry);
    next
}

/// Appends an empty item to a string list field (e.g. one more bullet).
pub fn push_item(items: &mut Vec<String>) {
    items.push(String::new());
}

/// Replaces the item at `index`; out-of-range indexes are ignored.
pub fn set_item(items: &mut [String], index: usize, value: impl Into<String>) {
    if let Some(item) = items.get_mut(index) {
        *item = value.into();
    }
}

/// Removes the item at `index`; out-of-range indexes are ignored.
pub fn remove_item(items: &mut Vec<String>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Adds `value` to a multi-select list unless it is blank or already there.
pub fn toggle_on(items: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if value.is_empty() || items.iter().any(|item| item == value) {
        return;
    }
    items.push(value.to_string());
}

/// Removes every occurrence of `value` from a multi-select list.
pub fn toggle_off(items: &mut Vec<String>, value: &str) {
    items.retain(|item| item != value);
}
