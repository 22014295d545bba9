//! Tidepool - fish-collecting game core
//!
//! The reward engine (rarity rolls, mutations, yields), the content
//! registry, egg hatching, the aquarium, player profiles, and local
//! persistence. Everything here is UI-agnostic; callers own the event
//! loop and any remote sync.

pub mod aquarium;
pub mod build_info;
pub mod core;
pub mod data;
pub mod eggs;
pub mod fishing;
pub mod items;
pub mod reward;
pub mod save_manager;
pub mod simulator;

pub use crate::core::constants;
pub use crate::core::profile::{EconomyError, Profile};
pub use aquarium::{Aquarium, AquariumError, AquariumSlot};
pub use eggs::EggGrade;
pub use fishing::{cast_line, CatchResult};
pub use items::{InventoryItem, ItemKind};
pub use reward::{
    generate_creature, roll_catch_outcome, roll_mutations, roll_rarity, CatchOutcome, Creature,
    Mutation, MutationCategory, Rarity, RollContext, RollTable, TableError,
};
pub use save_manager::SaveManager;
