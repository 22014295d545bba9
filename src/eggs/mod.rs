//! Egg grades and hatching.
//!
//! Each grade carries a bonus factor that reweights the roll table toward
//! the spotlight tiers and lifts every mutation check. Hatch timers are
//! metadata for callers; this module does not schedule anything.

use crate::reward::generation::{generate_creature, RollContext};
use crate::reward::table::{RollTable, TableError};
use crate::reward::types::Creature;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The five egg grades, in ascending quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EggGrade {
    Common,
    Rare,
    Epic,
    Legendary,
    Transcendent,
}

impl EggGrade {
    pub const ALL: [EggGrade; 5] = [
        EggGrade::Common,
        EggGrade::Rare,
        EggGrade::Epic,
        EggGrade::Legendary,
        EggGrade::Transcendent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            EggGrade::Common => "Common Egg",
            EggGrade::Rare => "Rare Egg",
            EggGrade::Epic => "Epic Egg",
            EggGrade::Legendary => "Legendary Egg",
            EggGrade::Transcendent => "Transcendent Egg",
        }
    }

    /// Roll-table bonus factor: 1.0 matches plain fishing, the best egg
    /// reaches 5.0.
    pub fn bonus_factor(&self) -> f64 {
        match self {
            EggGrade::Common => 1.0,
            EggGrade::Rare => 1.5,
            EggGrade::Epic => 2.0,
            EggGrade::Legendary => 3.0,
            EggGrade::Transcendent => 5.0,
        }
    }

    /// Shop price in algae.
    pub fn price(&self) -> f64 {
        match self {
            EggGrade::Common => 200.0,
            EggGrade::Rare => 1_200.0,
            EggGrade::Epic => 3_000.0,
            EggGrade::Legendary => 8_000.0,
            EggGrade::Transcendent => 500_000.0,
        }
    }

    /// Incubation time in minutes.
    pub fn hatch_minutes(&self) -> u32 {
        match self {
            EggGrade::Common => 5,
            EggGrade::Rare => 20,
            EggGrade::Epic => 45,
            EggGrade::Legendary => 90,
            EggGrade::Transcendent => 2_880,
        }
    }
}

/// Hatches one egg: derives the grade's roll table from the base table
/// and generates a creature under the egg-hatch context.
pub fn hatch(grade: EggGrade, owner_id: &str, rng: &mut impl Rng) -> Result<Creature, TableError> {
    let factor = grade.bonus_factor();
    let table = RollTable::base().with_egg_bonus(factor)?;
    let context = RollContext::egg_hatch(factor)?;
    Ok(generate_creature(&table, &context, owner_id, rng))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reward::types::Rarity;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn create_test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(12345)
    }

    #[test]
    fn test_grades_ascend_in_factor_and_price() {
        for pair in EggGrade::ALL.windows(2) {
            assert!(pair[0].bonus_factor() < pair[1].bonus_factor());
            assert!(pair[0].price() < pair[1].price());
            assert!(pair[0].hatch_minutes() < pair[1].hatch_minutes());
        }
    }

    #[test]
    fn test_factor_range() {
        assert!((EggGrade::Common.bonus_factor() - 1.0).abs() < f64::EPSILON);
        assert!((EggGrade::Transcendent.bonus_factor() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_hatch_produces_valid_creature() {
        let mut rng = create_test_rng();
        for grade in EggGrade::ALL {
            let creature = hatch(grade, "keeper", &mut rng).unwrap();
            assert_eq!(creature.owner_id, "keeper");
            assert!(creature.algae_per_hour >= Rarity::Common.base_yield());
            assert!(creature.mutations.len() <= 3);
        }
    }

    #[test]
    fn test_better_eggs_hatch_rarer_creatures() {
        let mut rng = create_test_rng();
        let trials = 10_000;

        let above_common = |grade: EggGrade, rng: &mut ChaCha8Rng| -> u32 {
            (0..trials)
                .filter(|_| hatch(grade, "keeper", rng).unwrap().rarity > Rarity::Common)
                .count() as u32
        };

        let common_egg = above_common(EggGrade::Common, &mut rng);
        let legendary_egg = above_common(EggGrade::Legendary, &mut rng);
        assert!(
            legendary_egg > common_egg,
            "legendary eggs should beat common eggs: {legendary_egg} vs {common_egg}"
        );
    }
}
