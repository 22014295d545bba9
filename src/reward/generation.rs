//! Creature generation: rarity rolls, mutation rolls, and cast outcomes.

use super::table::{RollTable, TableError};
use super::types::{CatchOutcome, Creature, Mutation, Rarity};
use crate::core::constants::{
    CATCH_CONSUMABLE_BAND, CATCH_CREATURE_BAND, EGG_MUTATION_CHANCE_PER_FACTOR,
};
use crate::data::{self, MutationTemplate};
use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

/// One mutation check: the template granted on success and the base
/// trigger chance (probability in [0, 1]).
#[derive(Debug, Clone, Copy)]
pub struct MutationCheck {
    pub template: MutationTemplate,
    pub base_chance: f64,
}

/// Checks rolled on a plain fishing catch.
const FISHING_MUTATION_CHECKS: [MutationCheck; 2] = [
    MutationCheck { template: data::GILDED_SCALES, base_chance: 0.30 },
    MutationCheck { template: data::INNER_FLAME, base_chance: 0.10 },
];

/// Checks rolled on an egg hatch. Hatching reaches one category further
/// than fishing.
const HATCH_MUTATION_CHECKS: [MutationCheck; 3] = [
    MutationCheck { template: data::GILDED_SCALES, base_chance: 0.30 },
    MutationCheck { template: data::INNER_FLAME, base_chance: 0.15 },
    MutationCheck { template: data::MYSTIC_AURA, base_chance: 0.05 },
];

/// Where a generation roll came from. Determines which mutation checks
/// run and how much the egg bonus lifts their chances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RollContext {
    /// A plain cast; no chance bonus.
    Fishing,
    /// An egg hatch with the egg's bonus factor (>= 1).
    EggHatch { bonus_factor: f64 },
}

impl RollContext {
    /// Builds an egg-hatch context, rejecting non-positive factors.
    pub fn egg_hatch(bonus_factor: f64) -> Result<Self, TableError> {
        if bonus_factor <= 0.0 {
            return Err(TableError::NonPositiveBonus(bonus_factor));
        }
        Ok(RollContext::EggHatch { bonus_factor })
    }

    fn checks(&self) -> &'static [MutationCheck] {
        match self {
            RollContext::Fishing => &FISHING_MUTATION_CHECKS,
            RollContext::EggHatch { .. } => &HATCH_MUTATION_CHECKS,
        }
    }

    /// Additive lift applied to every check's trigger chance.
    fn chance_bonus(&self) -> f64 {
        match self {
            RollContext::Fishing => 0.0,
            RollContext::EggHatch { bonus_factor } => {
                bonus_factor * EGG_MUTATION_CHANCE_PER_FACTOR
            }
        }
    }
}

/// Rolls a rarity tier from the given table.
///
/// Draws once in [0, 100) and walks tiers in canonical order against the
/// cumulative weight. Derived tables may cover less than the full draw
/// range; a draw past the last threshold falls back to Common, so the
/// result is always one of the ten tiers.
pub fn roll_rarity(table: &RollTable, rng: &mut impl Rng) -> Rarity {
    let roll: f64 = rng.gen_range(0.0..100.0);

    let mut cumulative = 0.0;
    for rarity in Rarity::ALL {
        cumulative += table.weight(rarity);
        if roll <= cumulative {
            return rarity;
        }
    }

    Rarity::Common
}

/// Rolls the context's mutation checks, each with its own independent
/// draw. Returns zero or more mutations, never more than the context has
/// checks.
pub fn roll_mutations(context: &RollContext, rng: &mut impl Rng) -> Vec<Mutation> {
    let bonus = context.chance_bonus();
    let mut rolled = Vec::new();

    for check in context.checks() {
        let chance = (check.base_chance + bonus).min(1.0);
        if rng.gen::<f64>() < chance {
            rolled.push(Mutation {
                name: check.template.name.to_string(),
                category: check.template.category,
                bonus: check.template.bonus,
            });
        }
    }

    rolled
}

/// Generates one creature: rarity from the table, mutations from the
/// context, a display name drawn uniformly from the species pool, and a
/// yield of tier base plus mutation bonuses.
///
/// Pure apart from the RNG; persistence is the caller's concern. The id
/// is derived from the same RNG, so seeded rolls are fully reproducible.
pub fn generate_creature(
    table: &RollTable,
    context: &RollContext,
    owner_id: &str,
    rng: &mut impl Rng,
) -> Creature {
    let rarity = roll_rarity(table, rng);
    let mutations = roll_mutations(context, rng);

    let names = data::species_names();
    let name = names[rng.gen_range(0..names.len())].to_string();

    let mutation_bonus: f64 = mutations.iter().map(|m| m.bonus).sum();
    let algae_per_hour = rarity.base_yield() + mutation_bonus;

    Creature {
        id: Uuid::from_u128(rng.gen()),
        name,
        rarity,
        mutations,
        owner_id: owner_id.to_string(),
        created_at: Utc::now(),
        algae_per_hour,
    }
}

/// Rolls the three-way cast outcome on a single [0, 100) draw: the
/// creature band first, the consumable band next, empty-handed for the
/// remainder.
pub fn roll_catch_outcome(rng: &mut impl Rng) -> CatchOutcome {
    let roll: f64 = rng.gen_range(0.0..100.0);

    if roll < CATCH_CREATURE_BAND {
        CatchOutcome::Creature
    } else if roll < CATCH_CREATURE_BAND + CATCH_CONSUMABLE_BAND {
        CatchOutcome::Consumable
    } else {
        CatchOutcome::Nothing
    }
}
