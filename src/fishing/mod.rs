//! Cast orchestration: pay the cost, roll the outcome, record the haul.

use crate::core::constants::CAST_COST_ALGAE;
use crate::core::profile::{EconomyError, Profile};
use crate::items::{common_algae, InventoryItem};
use crate::reward::generation::{generate_creature, roll_catch_outcome, RollContext};
use crate::reward::table::RollTable;
use crate::reward::types::{CatchOutcome, Creature};
use log::debug;
use rand::Rng;

/// What one paid cast brought in.
#[derive(Debug, Clone, PartialEq)]
pub enum CatchResult {
    Creature(Creature),
    Consumable(InventoryItem),
    Nothing,
}

impl CatchResult {
    /// Player-facing line for the catch log.
    pub fn message(&self) -> String {
        match self {
            CatchResult::Creature(c) => {
                format!("You caught a {} ({})!", c.name, c.rarity.name())
            }
            CatchResult::Consumable(item) => format!("You hauled in {}!", item.name),
            CatchResult::Nothing => "Nothing this time...".to_string(),
        }
    }
}

/// Casts the line once for `profile`.
///
/// Debits the cast cost up front (rejecting the cast entirely when the
/// wallet is short), rolls the three-way outcome, and books the result
/// into the profile. The caller persists the profile afterwards.
pub fn cast_line(profile: &mut Profile, rng: &mut impl Rng) -> Result<CatchResult, EconomyError> {
    profile.spend_algae(CAST_COST_ALGAE)?;
    profile.total_casts += 1;

    let result = match roll_catch_outcome(rng) {
        CatchOutcome::Creature => {
            let creature = generate_creature(
                &RollTable::base(),
                &RollContext::Fishing,
                &profile.owner_id,
                rng,
            );
            profile.record_creature(&creature);
            profile.total_catches += 1;
            CatchResult::Creature(creature)
        }
        CatchOutcome::Consumable => {
            let item = common_algae();
            profile.add_item(item.clone());
            CatchResult::Consumable(item)
        }
        CatchOutcome::Nothing => CatchResult::Nothing,
    };

    debug!(
        "cast #{} for {}: {}",
        profile.total_casts,
        profile.owner_id,
        result.message()
    );
    Ok(result)
}
