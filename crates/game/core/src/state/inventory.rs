//! Player inventory: item name to a positive count.

use std::collections::BTreeMap;

/// Counts of owned items, keyed by catalog name.
///
/// Every stored count is positive; an entry disappears when its last unit is
/// taken. Iteration is in name order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Inventory {
    items: BTreeMap<String, u32>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` units of `item`, creating the entry if needed.
    pub fn add(&mut self, item: &str, count: u32) {
        if count == 0 {
            return;
        }
        *self.items.entry(item.to_owned()).or_default() += count;
    }

    /// Removes one unit of `item`. Returns false if none is owned.
    pub fn take(&mut self, item: &str) -> bool {
        let Some(count) = self.items.get_mut(item) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.items.remove(item);
        }
        true
    }

    pub fn count(&self, item: &str) -> u32 {
        self.items.get(item).copied().unwrap_or(0)
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(name, count)| (name.as_str(), *count))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
