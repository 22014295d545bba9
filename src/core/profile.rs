//! The player profile: wallet, inventory, collection ledger, and passive
//! accrual. All state a save file carries lives here.

use crate::aquarium::Aquarium;
use crate::items::{stack_into, InventoryItem};
use crate::reward::types::Creature;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EconomyError {
    #[error("insufficient algae: have {have:.1}, need {need:.1}")]
    InsufficientAlgae { have: f64, need: f64 },
}

/// Everything a player owns and has done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub owner_id: String,
    pub algae: f64,
    pub inventory: Vec<InventoryItem>,
    pub aquarium: Aquarium,
    /// Species name -> number caught or hatched, lifetime.
    #[serde(default)]
    pub collection: HashMap<String, u32>,
    #[serde(default)]
    pub total_casts: u64,
    #[serde(default)]
    pub total_catches: u64,
    #[serde(default)]
    pub total_hatches: u64,
    pub created_at: i64,
    pub last_save_time: i64,
}

impl Profile {
    /// Starts a fresh profile with enough algae for a handful of casts.
    pub fn new(owner_id: &str) -> Self {
        let now = Utc::now().timestamp();
        Self {
            owner_id: owner_id.to_string(),
            algae: 100.0,
            inventory: Vec::new(),
            aquarium: Aquarium::new(),
            collection: HashMap::new(),
            total_casts: 0,
            total_catches: 0,
            total_hatches: 0,
            created_at: now,
            last_save_time: now,
        }
    }

    pub fn can_afford(&self, cost: f64) -> bool {
        self.algae >= cost
    }

    /// Debits the wallet, rejecting overdrafts.
    pub fn spend_algae(&mut self, cost: f64) -> Result<(), EconomyError> {
        if !self.can_afford(cost) {
            return Err(EconomyError::InsufficientAlgae {
                have: self.algae,
                need: cost,
            });
        }
        self.algae -= cost;
        Ok(())
    }

    pub fn deposit_algae(&mut self, amount: f64) {
        self.algae += amount;
    }

    /// Credits the aquarium's yield for `hours` of elapsed time and
    /// returns the amount earned.
    pub fn accrue(&mut self, hours: f64) -> f64 {
        let earned = self.aquarium.algae_per_hour() * hours.max(0.0);
        self.algae += earned;
        earned
    }

    pub fn add_item(&mut self, item: InventoryItem) {
        stack_into(&mut self.inventory, item);
    }

    /// Records a generated creature in the collection ledger.
    pub fn record_creature(&mut self, creature: &Creature) {
        *self.collection.entry(creature.name.clone()).or_insert(0) += 1;
    }

    /// Distinct species names collected so far.
    pub fn species_discovered(&self) -> usize {
        self.collection.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::common_algae;
    use crate::reward::generation::{generate_creature, RollContext};
    use crate::reward::table::RollTable;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_creature(seed: u64) -> Creature {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        generate_creature(&RollTable::base(), &RollContext::Fishing, "keeper", &mut rng)
    }

    #[test]
    fn test_new_profile_defaults() {
        let profile = Profile::new("keeper");
        assert_eq!(profile.owner_id, "keeper");
        assert!((profile.algae - 100.0).abs() < f64::EPSILON);
        assert!(profile.inventory.is_empty());
        assert_eq!(profile.species_discovered(), 0);
    }

    #[test]
    fn test_spend_algae_rejects_overdraft() {
        let mut profile = Profile::new("keeper");
        let err = profile.spend_algae(150.0).unwrap_err();
        assert_eq!(
            err,
            EconomyError::InsufficientAlgae {
                have: 100.0,
                need: 150.0
            }
        );
        assert!((profile.algae - 100.0).abs() < f64::EPSILON, "balance untouched");
    }

    #[test]
    fn test_spend_and_deposit() {
        let mut profile = Profile::new("keeper");
        profile.spend_algae(30.0).unwrap();
        profile.deposit_algae(5.0);
        assert!((profile.algae - 75.0).abs() < 1e-9);
    }

    #[test]
    fn test_accrue_credits_aquarium_yield() {
        let mut profile = Profile::new("keeper");
        let creature = test_creature(1);
        let rate = creature.algae_per_hour;
        profile.aquarium.place(creature, 0).unwrap();

        let earned = profile.accrue(2.0);
        assert!((earned - rate * 2.0).abs() < 1e-9);
        assert!((profile.algae - (100.0 + rate * 2.0)).abs() < 1e-9);
    }

    #[test]
    fn test_accrue_ignores_negative_hours() {
        let mut profile = Profile::new("keeper");
        profile.aquarium.place(test_creature(1), 0).unwrap();
        assert!((profile.accrue(-3.0)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_inventory_stacks() {
        let mut profile = Profile::new("keeper");
        profile.add_item(common_algae());
        profile.add_item(common_algae());
        assert_eq!(profile.inventory.len(), 1);
        assert_eq!(profile.inventory[0].quantity, 2);
    }

    #[test]
    fn test_record_creature_counts_species() {
        let mut profile = Profile::new("keeper");
        let a = test_creature(1);
        profile.record_creature(&a);
        profile.record_creature(&a);
        assert_eq!(profile.collection.get(&a.name), Some(&2));
        assert_eq!(profile.species_discovered(), 1);
    }
}
