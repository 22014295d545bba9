//! Roll tables: weight distributions over rarity tiers.
//!
//! Tables are immutable; reweighting (the egg bonus) always produces a new
//! table instead of touching shared state.

use super::types::Rarity;
use crate::core::constants::{
    EGG_BONUS_COMMON_DAMP, EGG_BONUS_EPIC_SCALE, EGG_BONUS_RARE_SCALE,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("negative weight {weight} for {tier} tier")]
    NegativeWeight { tier: &'static str, weight: f64 },
    #[error("roll table has no probability mass")]
    NoMass,
    #[error("bonus factor must be positive, got {0}")]
    NonPositiveBonus(f64),
}

/// A named weight per rarity tier, in canonical tier order.
///
/// Weights are probability mass against a [0, 100) draw. The base table
/// sums to exactly 100; derived tables may not, and selection must go
/// through [`roll_rarity`](super::generation::roll_rarity)'s cumulative
/// scan rather than assuming a fixed total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollTable {
    weights: [f64; Rarity::COUNT],
}

impl RollTable {
    /// Builds a table from per-tier weights in canonical order, rejecting
    /// negative weights and tables with no mass at all.
    pub fn new(weights: [f64; Rarity::COUNT]) -> Result<Self, TableError> {
        for (rarity, &weight) in Rarity::ALL.iter().zip(weights.iter()) {
            if weight < 0.0 {
                return Err(TableError::NegativeWeight {
                    tier: rarity.name(),
                    weight,
                });
            }
        }
        if weights.iter().all(|&w| w == 0.0) {
            return Err(TableError::NoMass);
        }
        Ok(Self { weights })
    }

    /// The default fishing table: each tier at its base spawn weight.
    pub fn base() -> Self {
        let mut weights = [0.0; Rarity::COUNT];
        for rarity in Rarity::ALL {
            weights[rarity as usize] = rarity.base_weight();
        }
        Self { weights }
    }

    pub fn weight(&self, rarity: Rarity) -> f64 {
        self.weights[rarity as usize]
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }

    /// Derives an egg table by reweighting toward the higher tiers.
    ///
    /// For `bonus_factor > 1`: Legendary scales by the factor, Epic by
    /// factor * 0.8, Rare by factor * 0.6, and Common is halved. A factor
    /// in (0, 1] returns the table unchanged (plain fishing). The result
    /// generally no longer sums to 100; the cumulative selection handles
    /// both overshoot and shortfall.
    pub fn with_egg_bonus(&self, bonus_factor: f64) -> Result<Self, TableError> {
        if bonus_factor <= 0.0 {
            return Err(TableError::NonPositiveBonus(bonus_factor));
        }
        if bonus_factor <= 1.0 {
            return Ok(self.clone());
        }

        let mut weights = self.weights;
        weights[Rarity::Legendary as usize] *= bonus_factor;
        weights[Rarity::Epic as usize] *= bonus_factor * EGG_BONUS_EPIC_SCALE;
        weights[Rarity::Rare as usize] *= bonus_factor * EGG_BONUS_RARE_SCALE;
        weights[Rarity::Common as usize] *= EGG_BONUS_COMMON_DAMP;
        Ok(Self { weights })
    }
}

impl Default for RollTable {
    fn default() -> Self {
        Self::base()
    }
}
