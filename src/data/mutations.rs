//! Mutation compendium: every mutation a creature can carry, across the
//! five categories.

use crate::reward::types::{MutationCategory, Rarity};

/// Static mutation template. `chance` is the template's independent
/// trigger probability (percent) as listed in the compendium; the roll
/// contexts in `reward::generation` apply their own per-check thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MutationTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub category: MutationCategory,
    pub rarity: Rarity,
    /// Flat algae-per-hour bonus granted to the creature.
    pub bonus: f64,
    pub chance: f64,
    pub blurb: &'static str,
}

// The three templates the roll contexts grant directly.
pub const GILDED_SCALES: MutationTemplate = MutationTemplate {
    id: "gilded-scales",
    name: "Gilded Scales",
    category: MutationCategory::Physical,
    rarity: Rarity::Common,
    bonus: 2.0,
    chance: 8.0,
    blurb: "Scales that shine like gold",
};

pub const INNER_FLAME: MutationTemplate = MutationTemplate {
    id: "inner-flame",
    name: "Inner Flame",
    category: MutationCategory::Elemental,
    rarity: Rarity::Common,
    bonus: 5.0,
    chance: 5.0,
    blurb: "Radiates a steady warmth",
};

pub const MYSTIC_AURA: MutationTemplate = MutationTemplate {
    id: "mystic-aura",
    name: "Mystic Aura",
    category: MutationCategory::Special,
    rarity: Rarity::Uncommon,
    bonus: 10.0,
    chance: 3.0,
    blurb: "A faint shimmer no lens explains",
};

pub const MUTATIONS: [MutationTemplate; 50] = [
    // Physical
    GILDED_SCALES,
    MutationTemplate { id: "broad-fins", name: "Broad Fins", category: MutationCategory::Physical, rarity: Rarity::Common, bonus: 3.0, chance: 8.0, blurb: "Fins wider than the book says" },
    MutationTemplate { id: "twin-tail", name: "Twin Tail", category: MutationCategory::Physical, rarity: Rarity::Uncommon, bonus: 5.0, chance: 6.0, blurb: "Two tails where one would do" },
    MutationTemplate { id: "crystal-eyes", name: "Crystal Eyes", category: MutationCategory::Physical, rarity: Rarity::Uncommon, bonus: 4.0, chance: 6.0, blurb: "Eyes clear as cut glass" },
    MutationTemplate { id: "venom-spines", name: "Venom Spines", category: MutationCategory::Physical, rarity: Rarity::Rare, bonus: 8.0, chance: 4.0, blurb: "Handle with a thick glove" },
    MutationTemplate { id: "lantern-fins", name: "Lantern Fins", category: MutationCategory::Physical, rarity: Rarity::Rare, bonus: 7.0, chance: 4.0, blurb: "Fins that carry their own light" },
    MutationTemplate { id: "glass-body", name: "Glass Body", category: MutationCategory::Physical, rarity: Rarity::Epic, bonus: 12.0, chance: 2.0, blurb: "See right through it" },
    MutationTemplate { id: "steel-scales", name: "Steel Scales", category: MutationCategory::Physical, rarity: Rarity::Epic, bonus: 15.0, chance: 2.0, blurb: "Rings when tapped" },
    MutationTemplate { id: "shifting-form", name: "Shifting Form", category: MutationCategory::Physical, rarity: Rarity::Legendary, bonus: 25.0, chance: 0.6, blurb: "Never quite the same shape twice" },
    MutationTemplate { id: "regeneration", name: "Regeneration", category: MutationCategory::Physical, rarity: Rarity::Legendary, bonus: 30.0, chance: 0.6, blurb: "Grows back whatever it loses" },
    MutationTemplate { id: "rainbow-scales", name: "Rainbow Scales", category: MutationCategory::Physical, rarity: Rarity::Rare, bonus: 10.0, chance: 3.0, blurb: "Color shifts with the light" },
    MutationTemplate { id: "mending-flesh", name: "Mending Flesh", category: MutationCategory::Physical, rarity: Rarity::Epic, bonus: 20.0, chance: 1.5, blurb: "Wounds close in minutes" },
    MutationTemplate { id: "cell-storm", name: "Cell Storm", category: MutationCategory::Physical, rarity: Rarity::Mythic, bonus: 90.0, chance: 0.06, blurb: "Grows faster than it ages" },
    MutationTemplate { id: "diamond-scales", name: "Diamond Scales", category: MutationCategory::Physical, rarity: Rarity::Legendary, bonus: 35.0, chance: 0.4, blurb: "Harder than the jeweler's drill" },
    // Elemental
    INNER_FLAME,
    MutationTemplate { id: "clearwater-gills", name: "Clearwater Gills", category: MutationCategory::Elemental, rarity: Rarity::Common, bonus: 4.0, chance: 5.0, blurb: "Purifies the water around it" },
    MutationTemplate { id: "frost-touch", name: "Frost Touch", category: MutationCategory::Elemental, rarity: Rarity::Uncommon, bonus: 8.0, chance: 4.0, blurb: "Leaves rime on the glass" },
    MutationTemplate { id: "static-jolt", name: "Static Jolt", category: MutationCategory::Elemental, rarity: Rarity::Uncommon, bonus: 9.0, chance: 4.0, blurb: "Small sparks, big surprise" },
    MutationTemplate { id: "current-weaver", name: "Current Weaver", category: MutationCategory::Elemental, rarity: Rarity::Rare, bonus: 15.0, chance: 3.0, blurb: "Steers the tank's currents" },
    MutationTemplate { id: "private-storm", name: "Private Storm", category: MutationCategory::Elemental, rarity: Rarity::Epic, bonus: 25.0, chance: 1.5, blurb: "Weather of its very own" },
    MutationTemplate { id: "elemental-crown", name: "Elemental Crown", category: MutationCategory::Elemental, rarity: Rarity::Legendary, bonus: 40.0, chance: 0.5, blurb: "All four elements answer it" },
    MutationTemplate { id: "bubble-breath", name: "Bubble Breath", category: MutationCategory::Elemental, rarity: Rarity::Common, bonus: 3.0, chance: 4.0, blurb: "Blows bubbles that last" },
    MutationTemplate { id: "freezing-breath", name: "Freezing Breath", category: MutationCategory::Elemental, rarity: Rarity::Rare, bonus: 16.0, chance: 2.5, blurb: "Chills whatever drifts close" },
    // Special
    MutationTemplate { id: "biolight", name: "Biolight", category: MutationCategory::Special, rarity: Rarity::Common, bonus: 6.0, chance: 4.0, blurb: "Glows in the dark" },
    MutationTemplate { id: "echo-sense", name: "Echo Sense", category: MutationCategory::Special, rarity: Rarity::Uncommon, bonus: 10.0, chance: 3.0, blurb: "Navigates by sound alone" },
    MutationTemplate { id: "camouflage", name: "Camouflage", category: MutationCategory::Special, rarity: Rarity::Rare, bonus: 18.0, chance: 2.5, blurb: "Blink and you lose it" },
    MutationTemplate { id: "telepathy", name: "Telepathy", category: MutationCategory::Special, rarity: Rarity::Epic, bonus: 30.0, chance: 1.2, blurb: "You think of food; it appears" },
    MutationTemplate { id: "foresight", name: "Foresight", category: MutationCategory::Special, rarity: Rarity::Legendary, bonus: 50.0, chance: 0.3, blurb: "Dodges the net before it moves" },
    MYSTIC_AURA,
    MutationTemplate { id: "magnetism", name: "Magnetism", category: MutationCategory::Special, rarity: Rarity::Epic, bonus: 28.0, chance: 1.0, blurb: "Keep it away from the keys" },
    MutationTemplate { id: "xray-sight", name: "X-Ray Sight", category: MutationCategory::Special, rarity: Rarity::Epic, bonus: 32.0, chance: 0.9, blurb: "Sees through the decorations" },
    // Mystical
    MutationTemplate { id: "ancestral-blessing", name: "Ancestral Blessing", category: MutationCategory::Mystical, rarity: Rarity::Rare, bonus: 20.0, chance: 1.5, blurb: "The old schools remember it" },
    MutationTemplate { id: "spirit-link", name: "Spirit Link", category: MutationCategory::Mystical, rarity: Rarity::Epic, bonus: 35.0, chance: 1.0, blurb: "One fin in another world" },
    MutationTemplate { id: "transcendence", name: "Transcendence", category: MutationCategory::Mystical, rarity: Rarity::Legendary, bonus: 60.0, chance: 0.2, blurb: "The tank is a suggestion" },
    MutationTemplate { id: "divine-light", name: "Divine Light", category: MutationCategory::Mystical, rarity: Rarity::Mythic, bonus: 100.0, chance: 0.1, blurb: "Other fish orbit it" },
    MutationTemplate { id: "self-split", name: "Self Split", category: MutationCategory::Mystical, rarity: Rarity::Mythic, bonus: 120.0, chance: 0.08, blurb: "Count again; there are two" },
    MutationTemplate { id: "phase-walk", name: "Phase Walk", category: MutationCategory::Mystical, rarity: Rarity::Legendary, bonus: 55.0, chance: 0.15, blurb: "The glass does not apply" },
    MutationTemplate { id: "soulbound", name: "Soulbound", category: MutationCategory::Mystical, rarity: Rarity::Divine, bonus: 500.0, chance: 0.015, blurb: "Tied to a soul far away" },
    // Cosmic
    MutationTemplate { id: "star-eater", name: "Star Eater", category: MutationCategory::Cosmic, rarity: Rarity::Rare, bonus: 25.0, chance: 1.0, blurb: "Feeds on starlight" },
    MutationTemplate { id: "dimension-drift", name: "Dimension Drift", category: MutationCategory::Cosmic, rarity: Rarity::Epic, bonus: 45.0, chance: 0.8, blurb: "Sometimes absent; always back" },
    MutationTemplate { id: "time-bender", name: "Time Bender", category: MutationCategory::Cosmic, rarity: Rarity::Legendary, bonus: 80.0, chance: 0.3, blurb: "Feeding time is negotiable" },
    MutationTemplate { id: "everywhere-at-once", name: "Everywhere at Once", category: MutationCategory::Cosmic, rarity: Rarity::Mythic, bonus: 150.0, chance: 0.1, blurb: "In every corner of the tank" },
    MutationTemplate { id: "reality-seed", name: "Reality Seed", category: MutationCategory::Cosmic, rarity: Rarity::Ancestral, bonus: 250.0, chance: 0.05, blurb: "New worlds bud off it" },
    MutationTemplate { id: "all-knowing", name: "All-Knowing", category: MutationCategory::Cosmic, rarity: Rarity::Divine, bonus: 400.0, chance: 0.02, blurb: "It has read your notes" },
    MutationTemplate { id: "all-power", name: "All-Power", category: MutationCategory::Cosmic, rarity: Rarity::Cosmic, bonus: 600.0, chance: 0.01, blurb: "Unlimited, unbothered" },
    MutationTemplate { id: "absolute-existence", name: "Absolute Existence", category: MutationCategory::Cosmic, rarity: Rarity::Transcendent, bonus: 1000.0, chance: 0.005, blurb: "Beyond the hobby entirely" },
    MutationTemplate { id: "energy-drinker", name: "Energy Drinker", category: MutationCategory::Cosmic, rarity: Rarity::Legendary, bonus: 70.0, chance: 0.25, blurb: "The heater works overtime" },
    MutationTemplate { id: "gravity-well", name: "Gravity Well", category: MutationCategory::Cosmic, rarity: Rarity::Ancestral, bonus: 300.0, chance: 0.03, blurb: "Pebbles roll toward it" },
    MutationTemplate { id: "universal-chord", name: "Universal Chord", category: MutationCategory::Cosmic, rarity: Rarity::Transcendent, bonus: 800.0, chance: 0.002, blurb: "In tune with everything" },
    MutationTemplate { id: "pocket-singularity", name: "Pocket Singularity", category: MutationCategory::Cosmic, rarity: Rarity::Cosmic, bonus: 750.0, chance: 0.008, blurb: "A very dense little fish" },
];
