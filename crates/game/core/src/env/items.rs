/// Static catalog entry for a consumable item.
///
/// Items are global data referenced by name from inventories and loot
/// tables; there are no per-instance item objects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub name: String,
    pub description: String,
    /// Health restored when used, capped at the user's maximum.
    pub heal: i32,
}

impl ItemDefinition {
    pub fn new(name: impl Into<String>, description: impl Into<String>, heal: i32) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            heal,
        }
    }
}

/// Ordered collection of item definitions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    pub fn definition(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definition(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
