// Fishing economy
pub const CAST_COST_ALGAE: f64 = 10.0;

// Cast outcome bands (percent of a [0, 100) draw, checked in order;
// empty-handed is the remainder). Gameplay tuning lives here, not inline.
pub const CATCH_CREATURE_BAND: f64 = 0.8;
pub const CATCH_CONSUMABLE_BAND: f64 = 59.2;

// Yield derivation: tier base algae-per-hour = tier multiplier * this.
pub const YIELD_PER_MULTIPLIER_POINT: f64 = 10.0;

// Egg-bonus reweighting. For a bonus factor f > 1 the three spotlight
// tiers scale up (Legendary * f, Epic * f * 0.8, Rare * f * 0.6) and
// Common is damped; every other tier keeps its base weight.
pub const EGG_BONUS_EPIC_SCALE: f64 = 0.8;
pub const EGG_BONUS_RARE_SCALE: f64 = 0.6;
pub const EGG_BONUS_COMMON_DAMP: f64 = 0.5;

// Each point of egg bonus factor adds this much to every mutation
// check's trigger chance.
pub const EGG_MUTATION_CHANCE_PER_FACTOR: f64 = 0.1;

// Aquarium
pub const AQUARIUM_SLOTS: usize = 24;

// Save file format
pub const SAVE_VERSION_MAGIC: u64 = 0x5449_4445_0000_0001;
