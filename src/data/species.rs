//! Creature species catalog: five species per rarity tier.

use crate::reward::types::Rarity;

/// Static species template. `base_algae` is the catalog display value for
/// the dex; generated creatures derive their yield from the rarity tier,
/// not from the species row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub base_algae: f64,
    pub icon: &'static str,
    pub blurb: &'static str,
    /// Catalog spawn chance, percent.
    pub spawn_chance: f64,
}

pub const SPECIES: [SpeciesTemplate; 50] = [
    // Common (40% of the catalog mass)
    SpeciesTemplate { id: "goldfish", name: "Goldfish", rarity: Rarity::Common, base_algae: 10.0, icon: "🐠", blurb: "An everyday golden swimmer", spawn_chance: 8.0 },
    SpeciesTemplate { id: "blue-darter", name: "Blue Darter", rarity: Rarity::Common, base_algae: 12.0, icon: "🐟", blurb: "Quick fish of the shallows", spawn_chance: 8.0 },
    SpeciesTemplate { id: "green-grazer", name: "Green Grazer", rarity: Rarity::Common, base_algae: 11.0, icon: "🐡", blurb: "Placid herbivore", spawn_chance: 8.0 },
    SpeciesTemplate { id: "red-snapper", name: "Red Snapper", rarity: Rarity::Common, base_algae: 13.0, icon: "🔴", blurb: "Vivid red scales", spawn_chance: 8.0 },
    SpeciesTemplate { id: "silverscale", name: "Silverscale", rarity: Rarity::Common, base_algae: 14.0, icon: "⚪", blurb: "Mirror-bright flanks", spawn_chance: 8.0 },
    // Uncommon (25%)
    SpeciesTemplate { id: "striped-loach", name: "Striped Loach", rarity: Rarity::Uncommon, base_algae: 20.0, icon: "🦓", blurb: "No two stripe patterns alike", spawn_chance: 5.0 },
    SpeciesTemplate { id: "neon-glowfin", name: "Neon Glowfin", rarity: Rarity::Uncommon, base_algae: 22.0, icon: "💡", blurb: "Glows after dark", spawn_chance: 5.0 },
    SpeciesTemplate { id: "tropic-dancer", name: "Tropic Dancer", rarity: Rarity::Uncommon, base_algae: 25.0, icon: "🌺", blurb: "Warm-water wanderer", spawn_chance: 5.0 },
    SpeciesTemplate { id: "coral-dweller", name: "Coral Dweller", rarity: Rarity::Uncommon, base_algae: 23.0, icon: "🪸", blurb: "Never strays from the reef", spawn_chance: 5.0 },
    SpeciesTemplate { id: "thornfish", name: "Thornfish", rarity: Rarity::Uncommon, base_algae: 24.0, icon: "🦔", blurb: "Bristles when startled", spawn_chance: 5.0 },
    // Rare (20%)
    SpeciesTemplate { id: "crystal-fish", name: "Crystal Fish", rarity: Rarity::Rare, base_algae: 40.0, icon: "💎", blurb: "Body of living glass", spawn_chance: 4.0 },
    SpeciesTemplate { id: "rainbow-fish", name: "Rainbow Fish", rarity: Rarity::Rare, base_algae: 45.0, icon: "🌈", blurb: "Every color at once", spawn_chance: 4.0 },
    SpeciesTemplate { id: "electric-eelfin", name: "Electric Eelfin", rarity: Rarity::Rare, base_algae: 42.0, icon: "⚡", blurb: "Carries its own charge", spawn_chance: 4.0 },
    SpeciesTemplate { id: "ghostfin", name: "Ghostfin", rarity: Rarity::Rare, base_algae: 38.0, icon: "👻", blurb: "Half there, half not", spawn_chance: 4.0 },
    SpeciesTemplate { id: "moonfish", name: "Moonfish", rarity: Rarity::Rare, base_algae: 43.0, icon: "🌙", blurb: "Shines like moonlight", spawn_chance: 4.0 },
    // Epic (10%)
    SpeciesTemplate { id: "dragonfish", name: "Dragonfish", rarity: Rarity::Epic, base_algae: 80.0, icon: "🐉", blurb: "Scaled like its namesake", spawn_chance: 2.0 },
    SpeciesTemplate { id: "phoenix-koi", name: "Phoenix Koi", rarity: Rarity::Epic, base_algae: 85.0, icon: "🔥", blurb: "Rises from its own ashes", spawn_chance: 2.0 },
    SpeciesTemplate { id: "icefin", name: "Icefin", rarity: Rarity::Epic, base_algae: 75.0, icon: "❄️", blurb: "At home under the ice", spawn_chance: 2.0 },
    SpeciesTemplate { id: "stormfish", name: "Stormfish", rarity: Rarity::Epic, base_algae: 82.0, icon: "⛈️", blurb: "Thunder follows it", spawn_chance: 2.0 },
    SpeciesTemplate { id: "shadowfin", name: "Shadowfin", rarity: Rarity::Epic, base_algae: 78.0, icon: "🌑", blurb: "From the lightless deep", spawn_chance: 2.0 },
    // Legendary (3%)
    SpeciesTemplate { id: "elder-goldfish", name: "Elder Goldfish", rarity: Rarity::Legendary, base_algae: 150.0, icon: "👑", blurb: "Oldest of the golden line", spawn_chance: 0.6 },
    SpeciesTemplate { id: "galaxy-carp", name: "Galaxy Carp", rarity: Rarity::Legendary, base_algae: 160.0, icon: "🌌", blurb: "Came from distant waters", spawn_chance: 0.6 },
    SpeciesTemplate { id: "blessed-angelfish", name: "Blessed Angelfish", rarity: Rarity::Legendary, base_algae: 170.0, icon: "✨", blurb: "Favored by the sea gods", spawn_chance: 0.6 },
    SpeciesTemplate { id: "chronofish", name: "Chronofish", rarity: Rarity::Legendary, base_algae: 155.0, icon: "⏰", blurb: "Swims against the clock", spawn_chance: 0.6 },
    SpeciesTemplate { id: "stellar-ray", name: "Stellar Ray", rarity: Rarity::Legendary, base_algae: 165.0, icon: "⭐", blurb: "Born under a falling star", spawn_chance: 0.6 },
    // Mythic (1.5%)
    SpeciesTemplate { id: "young-leviathan", name: "Young Leviathan", rarity: Rarity::Mythic, base_algae: 250.0, icon: "🐋", blurb: "Still growing into the legend", spawn_chance: 0.3 },
    SpeciesTemplate { id: "kraken-hatchling", name: "Kraken Hatchling", rarity: Rarity::Mythic, base_algae: 260.0, icon: "🐙", blurb: "Its parent is best left alone", spawn_chance: 0.3 },
    SpeciesTemplate { id: "primordial-gar", name: "Primordial Gar", rarity: Rarity::Mythic, base_algae: 270.0, icon: "🦕", blurb: "Unchanged since the first seas", spawn_chance: 0.3 },
    SpeciesTemplate { id: "voidfish", name: "Voidfish", rarity: Rarity::Mythic, base_algae: 255.0, icon: "🕳️", blurb: "Swims where nothing else is", spawn_chance: 0.3 },
    SpeciesTemplate { id: "endless-eel", name: "Endless Eel", rarity: Rarity::Mythic, base_algae: 280.0, icon: "♾️", blurb: "Nobody has seen the tail end", spawn_chance: 0.3 },
    // Ancestral (0.8%)
    SpeciesTemplate { id: "tide-warden", name: "Tide Warden", rarity: Rarity::Ancestral, base_algae: 400.0, icon: "🛡️", blurb: "Keeper of the old currents", spawn_chance: 0.16 },
    SpeciesTemplate { id: "oracle-fish", name: "Oracle Fish", rarity: Rarity::Ancestral, base_algae: 420.0, icon: "🔮", blurb: "Sees tomorrow's weather", spawn_chance: 0.16 },
    SpeciesTemplate { id: "titan-grouper", name: "Titan Grouper", rarity: Rarity::Ancestral, base_algae: 450.0, icon: "⚔️", blurb: "Titan of the ancient oceans", spawn_chance: 0.16 },
    SpeciesTemplate { id: "spirit-koi", name: "Spirit Koi", rarity: Rarity::Ancestral, base_algae: 430.0, icon: "👼", blurb: "Guardian spirit of the marsh", spawn_chance: 0.16 },
    SpeciesTemplate { id: "eternal-lungfish", name: "Eternal Lungfish", rarity: Rarity::Ancestral, base_algae: 440.0, icon: "🔄", blurb: "Outlives its own lakes", spawn_chance: 0.16 },
    // Divine (0.4%)
    SpeciesTemplate { id: "young-tidegod", name: "Young Tidegod", rarity: Rarity::Divine, base_algae: 600.0, icon: "🔱", blurb: "Heir to the trident", spawn_chance: 0.08 },
    SpeciesTemplate { id: "seamaker", name: "Seamaker", rarity: Rarity::Divine, base_algae: 650.0, icon: "🌍", blurb: "Said to have poured the oceans", spawn_chance: 0.08 },
    SpeciesTemplate { id: "sovereign-fish", name: "Sovereign Fish", rarity: Rarity::Divine, base_algae: 700.0, icon: "👑", blurb: "First among all fish", spawn_chance: 0.08 },
    SpeciesTemplate { id: "celestial-betta", name: "Celestial Betta", rarity: Rarity::Divine, base_algae: 620.0, icon: "☁️", blurb: "Trails a wake of sky", spawn_chance: 0.08 },
    SpeciesTemplate { id: "absolute-arowana", name: "Absolute Arowana", rarity: Rarity::Divine, base_algae: 680.0, icon: "💫", blurb: "Power in scaled form", spawn_chance: 0.08 },
    // Cosmic (0.2%)
    SpeciesTemplate { id: "multiverse-minnow", name: "Multiverse Minnow", rarity: Rarity::Cosmic, base_algae: 1000.0, icon: "🌐", blurb: "Schools with itself elsewhere", spawn_chance: 0.04 },
    SpeciesTemplate { id: "quantum-tetra", name: "Quantum Tetra", rarity: Rarity::Cosmic, base_algae: 1100.0, icon: "⚛️", blurb: "Both caught and not, until netted", spawn_chance: 0.04 },
    SpeciesTemplate { id: "dimension-skipper", name: "Dimension Skipper", rarity: Rarity::Cosmic, base_algae: 1200.0, icon: "🌀", blurb: "Slips between worlds", spawn_chance: 0.04 },
    SpeciesTemplate { id: "singularity-perch", name: "Singularity Perch", rarity: Rarity::Cosmic, base_algae: 1150.0, icon: "🕳️", blurb: "Hatched inside a black hole", spawn_chance: 0.04 },
    SpeciesTemplate { id: "omnipotent-oarfish", name: "Omnipotent Oarfish", rarity: Rarity::Cosmic, base_algae: 1300.0, icon: "🔥", blurb: "Limitless, and knows it", spawn_chance: 0.04 },
    // Transcendent (0.1%)
    SpeciesTemplate { id: "alpha-omega", name: "Alpha Omega", rarity: Rarity::Transcendent, base_algae: 2000.0, icon: "🅰️", blurb: "The first fish, and the last", spawn_chance: 0.02 },
    SpeciesTemplate { id: "concept-carp", name: "Concept Carp", rarity: Rarity::Transcendent, base_algae: 2200.0, icon: "💭", blurb: "Exists only as an idea", spawn_chance: 0.02 },
    SpeciesTemplate { id: "paradox-pike", name: "Paradox Pike", rarity: Rarity::Transcendent, base_algae: 2500.0, icon: "📖", blurb: "Writes its own story", spawn_chance: 0.02 },
    SpeciesTemplate { id: "meta-minnow", name: "Meta Minnow", rarity: Rarity::Transcendent, base_algae: 2300.0, icon: "🎭", blurb: "Aware it is being collected", spawn_chance: 0.02 },
    SpeciesTemplate { id: "the-fish", name: "The Fish", rarity: Rarity::Transcendent, base_algae: 3000.0, icon: "🌟", blurb: "Simply... The Fish", spawn_chance: 0.02 },
];
