//! Inventory item types.

use serde::{Deserialize, Serialize};

/// Closed set of inventory item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Food,
    Rod,
    Egg,
}

impl ItemKind {
    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Food => "Food",
            ItemKind::Rod => "Rod",
            ItemKind::Egg => "Egg",
        }
    }
}

/// A stackable inventory entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub name: String,
    pub kind: ItemKind,
    pub quantity: u32,
    pub icon: String,
    pub blurb: String,
}

impl InventoryItem {
    pub fn new(name: &str, kind: ItemKind, icon: &str, blurb: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            quantity: 1,
            icon: icon.to_string(),
            blurb: blurb.to_string(),
        }
    }
}

/// The everyday consumable a cast can haul in.
pub fn common_algae() -> InventoryItem {
    InventoryItem::new("Common Algae", ItemKind::Food, "🌿", "Basic creature feed")
}

/// Stacks `item` into `inventory`, merging with an existing entry of the
/// same name and kind.
pub fn stack_into(inventory: &mut Vec<InventoryItem>, item: InventoryItem) {
    if let Some(existing) = inventory
        .iter_mut()
        .find(|i| i.name == item.name && i.kind == item.kind)
    {
        existing.quantity += item.quantity;
    } else {
        inventory.push(item);
    }
}
