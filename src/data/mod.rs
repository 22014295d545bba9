//! Static content registry: species and mutation templates.
//!
//! Templates are compiled in as const tables and indexed once, on first
//! access, into immutable id-keyed maps. Nothing here is ever mutated
//! after startup.

pub mod mutations;
pub mod species;

pub use mutations::{MutationTemplate, GILDED_SCALES, INNER_FLAME, MUTATIONS, MYSTIC_AURA};
pub use species::{SpeciesTemplate, SPECIES};

use crate::reward::types::Rarity;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static SPECIES_BY_ID: Lazy<HashMap<&'static str, &'static SpeciesTemplate>> =
    Lazy::new(|| SPECIES.iter().map(|s| (s.id, s)).collect());

static MUTATIONS_BY_ID: Lazy<HashMap<&'static str, &'static MutationTemplate>> =
    Lazy::new(|| MUTATIONS.iter().map(|m| (m.id, m)).collect());

static SPECIES_NAMES: Lazy<Vec<&'static str>> =
    Lazy::new(|| SPECIES.iter().map(|s| s.name).collect());

/// Looks up a species template by id.
pub fn species(id: &str) -> Option<&'static SpeciesTemplate> {
    SPECIES_BY_ID.get(id).copied()
}

/// Looks up a mutation template by id.
pub fn mutation(id: &str) -> Option<&'static MutationTemplate> {
    MUTATIONS_BY_ID.get(id).copied()
}

/// The display-name pool creatures draw from, independent of rarity.
pub fn species_names() -> &'static [&'static str] {
    &SPECIES_NAMES
}

/// All species of one rarity tier, in catalog order.
pub fn species_of_rarity(rarity: Rarity) -> impl Iterator<Item = &'static SpeciesTemplate> {
    SPECIES.iter().filter(move |s| s.rarity == rarity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_ids_unique() {
        assert_eq!(SPECIES_BY_ID.len(), SPECIES.len(), "duplicate species id");
    }

    #[test]
    fn test_mutation_ids_unique() {
        assert_eq!(MUTATIONS_BY_ID.len(), MUTATIONS.len(), "duplicate mutation id");
    }

    #[test]
    fn test_five_species_per_tier() {
        for rarity in Rarity::ALL {
            assert_eq!(
                species_of_rarity(rarity).count(),
                5,
                "expected 5 {} species",
                rarity.name()
            );
        }
    }

    #[test]
    fn test_species_lookup() {
        let goldfish = species("goldfish").expect("goldfish should exist");
        assert_eq!(goldfish.name, "Goldfish");
        assert_eq!(goldfish.rarity, Rarity::Common);
        assert!(species("coelacanth").is_none());
    }

    #[test]
    fn test_name_pool_covers_catalog() {
        assert_eq!(species_names().len(), SPECIES.len());
        assert!(species_names().contains(&"The Fish"));
    }

    #[test]
    fn test_template_chances_and_bonuses_positive() {
        for s in &SPECIES {
            assert!(s.spawn_chance > 0.0, "{} spawn chance", s.id);
            assert!(s.base_algae > 0.0, "{} base algae", s.id);
        }
        for m in &MUTATIONS {
            assert!(m.chance > 0.0, "{} chance", m.id);
            assert!(m.bonus > 0.0, "{} bonus", m.id);
        }
    }

    #[test]
    fn test_context_check_templates_resolve() {
        for id in ["gilded-scales", "inner-flame", "mystic-aura"] {
            assert!(mutation(id).is_some(), "check template {id} missing");
        }
    }

    #[test]
    fn test_rarer_mutations_trigger_less() {
        // Within each category the compendium chance never rises as the
        // mutation's rarity class climbs.
        for a in &MUTATIONS {
            for b in &MUTATIONS {
                if a.category == b.category && a.rarity < b.rarity {
                    assert!(
                        a.chance >= b.chance,
                        "{} ({:?}) should not trigger less often than {} ({:?})",
                        a.id,
                        a.rarity,
                        b.id,
                        b.rarity
                    );
                }
            }
        }
    }
}
