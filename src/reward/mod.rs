//! The reward engine: roll tables, rarity selection, mutation rolls, and
//! creature generation.

pub mod generation;
pub mod table;
pub mod types;

pub use generation::{
    generate_creature, roll_catch_outcome, roll_mutations, roll_rarity, MutationCheck,
    RollContext,
};
pub use table::{RollTable, TableError};
pub use types::{CatchOutcome, Creature, Mutation, MutationCategory, Rarity};
