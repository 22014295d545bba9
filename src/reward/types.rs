//! Core reward types: rarity tiers, mutations, creatures, and catch outcomes.

use crate::core::constants::YIELD_PER_MULTIPLIER_POINT;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The ten rarity tiers, ordered from most to least common.
///
/// Discriminant order is the canonical roll order: cumulative-weight
/// selection walks tiers from `Common` to `Transcendent`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Epic = 3,
    Legendary = 4,
    Mythic = 5,
    Ancestral = 6,
    Divine = 7,
    Cosmic = 8,
    Transcendent = 9,
}

impl Rarity {
    pub const COUNT: usize = 10;

    /// All tiers in canonical roll order.
    pub const ALL: [Rarity; Rarity::COUNT] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
        Rarity::Ancestral,
        Rarity::Divine,
        Rarity::Cosmic,
        Rarity::Transcendent,
    ];

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
            Rarity::Ancestral => "Ancestral",
            Rarity::Divine => "Divine",
            Rarity::Cosmic => "Cosmic",
            Rarity::Transcendent => "Transcendent",
        }
    }

    /// Base spawn weight in the default roll table. Sums to 100 across
    /// all ten tiers.
    pub fn base_weight(&self) -> f64 {
        match self {
            Rarity::Common => 50.0,
            Rarity::Uncommon => 25.0,
            Rarity::Rare => 12.0,
            Rarity::Epic => 7.0,
            Rarity::Legendary => 3.0,
            Rarity::Mythic => 1.5,
            Rarity::Ancestral => 0.8,
            Rarity::Divine => 0.4,
            Rarity::Cosmic => 0.2,
            Rarity::Transcendent => 0.1,
        }
    }

    /// Yield multiplier used to derive the tier's base algae-per-hour.
    pub fn multiplier(&self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.5,
            Rarity::Rare => 2.0,
            Rarity::Epic => 3.0,
            Rarity::Legendary => 5.0,
            Rarity::Mythic => 8.0,
            Rarity::Ancestral => 12.0,
            Rarity::Divine => 20.0,
            Rarity::Cosmic => 35.0,
            Rarity::Transcendent => 50.0,
        }
    }

    /// Base algae-per-hour for a creature of this tier, before mutations.
    pub fn base_yield(&self) -> f64 {
        self.multiplier() * YIELD_PER_MULTIPLIER_POINT
    }
}

/// Mutation categories. Each category is rolled independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationCategory {
    Physical,
    Elemental,
    Special,
    Mystical,
    Cosmic,
}

impl MutationCategory {
    pub fn name(&self) -> &'static str {
        match self {
            MutationCategory::Physical => "Physical",
            MutationCategory::Elemental => "Elemental",
            MutationCategory::Special => "Special",
            MutationCategory::Mystical => "Mystical",
            MutationCategory::Cosmic => "Cosmic",
        }
    }
}

/// A mutation attached to a generated creature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mutation {
    pub name: String,
    pub category: MutationCategory,
    /// Flat algae-per-hour bonus added to the creature's yield.
    pub bonus: f64,
}

/// A creature produced by one roll. Immutable once generated; storage and
/// removal are the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: Uuid,
    pub name: String,
    pub rarity: Rarity,
    pub mutations: Vec<Mutation>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    /// Derived yield: tier base yield plus the sum of mutation bonuses.
    pub algae_per_hour: f64,
}

impl Creature {
    /// Sum of all attached mutation bonuses.
    pub fn mutation_bonus(&self) -> f64 {
        self.mutations.iter().map(|m| m.bonus).sum()
    }
}

/// Three-way outcome of a single cast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatchOutcome {
    /// A creature bit the line.
    Creature,
    /// Hauled in a consumable (food) instead.
    Consumable,
    /// Nothing this time.
    Nothing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        for pair in Rarity::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{:?} should sort below {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_base_weights_sum_to_100() {
        let total: f64 = Rarity::ALL.iter().map(|r| r.base_weight()).sum();
        assert!((total - 100.0).abs() < 1e-9, "weights should sum to 100, got {total}");
    }

    #[test]
    fn test_multipliers_strictly_increase() {
        for pair in Rarity::ALL.windows(2) {
            assert!(
                pair[0].multiplier() < pair[1].multiplier(),
                "{} multiplier should be below {}",
                pair[0].name(),
                pair[1].name()
            );
        }
    }

    #[test]
    fn test_base_yield_is_multiplier_times_ten() {
        assert!((Rarity::Common.base_yield() - 10.0).abs() < f64::EPSILON);
        assert!((Rarity::Legendary.base_yield() - 50.0).abs() < f64::EPSILON);
        assert!((Rarity::Transcendent.base_yield() - 500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rarity_names() {
        assert_eq!(Rarity::Common.name(), "Common");
        assert_eq!(Rarity::Mythic.name(), "Mythic");
        assert_eq!(Rarity::Transcendent.name(), "Transcendent");
    }

    #[test]
    fn test_mutation_bonus_sum() {
        let creature = Creature {
            id: Uuid::nil(),
            name: "Goldfish".to_string(),
            rarity: Rarity::Common,
            mutations: vec![
                Mutation {
                    name: "Gilded Scales".to_string(),
                    category: MutationCategory::Physical,
                    bonus: 2.0,
                },
                Mutation {
                    name: "Inner Flame".to_string(),
                    category: MutationCategory::Elemental,
                    bonus: 5.0,
                },
            ],
            owner_id: "tester".to_string(),
            created_at: Utc::now(),
            algae_per_hour: 17.0,
        };
        assert!((creature.mutation_bonus() - 7.0).abs() < f64::EPSILON);
    }
}
