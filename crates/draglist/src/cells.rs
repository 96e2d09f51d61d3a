//! Per-row tables shared between row renderers and drag logic.
//!
//! Both tables are allocated once per list instance and mutated in place.
//! Cloning a table clones the handle; every clone reads the same rows.

use draglist_core::{key_map, KeyMap, LiveRef};

/// Measured placement of a row along the list's main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellData {
    pub offset: f32,
    pub size: f32,
}

impl CellData {
    pub fn new(offset: f32, size: f32) -> Self {
        Self { offset, size }
    }

    /// Main-axis position just past the row.
    pub fn end(&self) -> f32 {
        self.offset + self.size
    }
}

/// Row key to [`CellData`].
#[derive(Clone, Debug, Default)]
pub struct CellTable {
    rows: LiveRef<KeyMap<CellData>>,
}

impl CellTable {
    pub fn new() -> Self {
        Self {
            rows: LiveRef::new(key_map()),
        }
    }

    /// Insert or replace the metadata for `key`, returning the old entry.
    pub fn insert(&self, key: impl Into<String>, data: CellData) -> Option<CellData> {
        self.rows.update(|rows| rows.insert(key.into(), data))
    }

    pub fn remove(&self, key: &str) -> Option<CellData> {
        self.rows.update(|rows| rows.remove(key))
    }

    pub fn get(&self, key: &str) -> Option<CellData> {
        self.rows.with(|rows| rows.get(key).copied())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.rows.with(|rows| rows.contains_key(key))
    }

    /// Mutate the entry for `key` in place. Returns `None` if the row is unknown.
    pub fn update<R>(&self, key: &str, f: impl FnOnce(&mut CellData) -> R) -> Option<R> {
        self.rows.update(|rows| rows.get_mut(key).map(f))
    }

    pub fn retain(&self, mut keep: impl FnMut(&str, &CellData) -> bool) {
        self.rows.update(|rows| rows.retain(|key, data| keep(key, data)));
    }

    pub fn clear(&self) {
        self.rows.update(|rows| rows.clear());
    }

    pub fn len(&self) -> usize {
        self.rows.with(|rows| rows.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direct access to the underlying map for bulk reads and writes.
    pub fn live(&self) -> &LiveRef<KeyMap<CellData>> {
        &self.rows
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.rows.ptr_eq(&other.rows)
    }
}

/// Row key to current ordinal position.
#[derive(Clone, Debug, Default)]
pub struct KeyIndexTable {
    indices: LiveRef<KeyMap<usize>>,
}

impl KeyIndexTable {
    pub fn new() -> Self {
        Self {
            indices: LiveRef::new(key_map()),
        }
    }

    pub fn set(&self, key: impl Into<String>, index: usize) -> Option<usize> {
        self.indices.update(|indices| indices.insert(key.into(), index))
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.indices.with(|indices| indices.get(key).copied())
    }

    pub fn remove(&self, key: &str) -> Option<usize> {
        self.indices.update(|indices| indices.remove(key))
    }

    /// Key currently mapped to `index`. Linear in the number of rows.
    pub fn key_at(&self, index: usize) -> Option<String> {
        self.indices.with(|indices| {
            indices
                .iter()
                .find(|(_, position)| **position == index)
                .map(|(key, _)| key.clone())
        })
    }

    pub fn clear(&self) {
        self.indices.update(|indices| indices.clear());
    }

    /// Clear and refill from `keys` in order, keeping the same table.
    pub fn rebuild(&self, keys: impl IntoIterator<Item = String>) {
        self.indices.update(|indices| {
            indices.clear();
            for (index, key) in keys.into_iter().enumerate() {
                indices.insert(key, index);
            }
        });
    }

    pub fn len(&self) -> usize {
        self.indices.with(|indices| indices.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn live(&self) -> &LiveRef<KeyMap<usize>> {
        &self.indices
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        self.indices.ptr_eq(&other.indices)
    }
}

#[cfg(test)]
#[path = "tests/cells_tests.rs"]
mod tests;
