//! Simulation report: aggregation and rendering.

use crate::reward::types::Rarity;
use serde::Serialize;

/// Per-tier aggregate row.
#[derive(Debug, Clone, Serialize)]
pub struct TierRow {
    pub tier: &'static str,
    pub count: u64,
    pub percent: f64,
    pub avg_yield: f64,
}

/// Aggregated results of one simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub mode: String,
    pub trials: u64,
    pub seed: Option<u64>,

    /// Outcome bands; all zero in hatch mode, where every trial produces
    /// a creature.
    pub outcome_creature: u64,
    pub outcome_consumable: u64,
    pub outcome_nothing: u64,

    pub creatures_generated: u64,
    pub tiers: Vec<TierRow>,
    pub mutated_creatures: u64,
    pub total_mutations: u64,
    pub avg_yield: f64,
}

impl SimReport {
    /// Builds the report from raw per-tier tallies.
    #[allow(clippy::too_many_arguments)]
    pub fn from_tallies(
        mode: String,
        trials: u64,
        seed: Option<u64>,
        outcomes: (u64, u64, u64),
        tier_counts: [u64; Rarity::COUNT],
        tier_yield_sums: [f64; Rarity::COUNT],
        mutated_creatures: u64,
        total_mutations: u64,
    ) -> Self {
        let creatures_generated: u64 = tier_counts.iter().sum();

        let tiers = Rarity::ALL
            .iter()
            .map(|&rarity| {
                let count = tier_counts[rarity as usize];
                TierRow {
                    tier: rarity.name(),
                    count,
                    percent: if creatures_generated > 0 {
                        count as f64 / creatures_generated as f64 * 100.0
                    } else {
                        0.0
                    },
                    avg_yield: if count > 0 {
                        tier_yield_sums[rarity as usize] / count as f64
                    } else {
                        0.0
                    },
                }
            })
            .collect();

        let total_yield: f64 = tier_yield_sums.iter().sum();
        SimReport {
            mode,
            trials,
            seed,
            outcome_creature: outcomes.0,
            outcome_consumable: outcomes.1,
            outcome_nothing: outcomes.2,
            creatures_generated,
            tiers,
            mutated_creatures,
            total_mutations,
            avg_yield: if creatures_generated > 0 {
                total_yield / creatures_generated as f64
            } else {
                0.0
            },
        }
    }

    /// Renders the aligned text report.
    pub fn to_text(&self) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "Mode: {}   Trials: {}   Seed: {}\n\n",
            self.mode,
            self.trials,
            self.seed.map_or("entropy".to_string(), |s| s.to_string())
        ));

        if self.outcome_creature + self.outcome_consumable + self.outcome_nothing > 0 {
            let pct = |n: u64| n as f64 / self.trials as f64 * 100.0;
            out.push_str("Cast outcomes:\n");
            out.push_str(&format!(
                "  creature    {:>8}  ({:>6.2}%)\n",
                self.outcome_creature,
                pct(self.outcome_creature)
            ));
            out.push_str(&format!(
                "  consumable  {:>8}  ({:>6.2}%)\n",
                self.outcome_consumable,
                pct(self.outcome_consumable)
            ));
            out.push_str(&format!(
                "  nothing     {:>8}  ({:>6.2}%)\n\n",
                self.outcome_nothing,
                pct(self.outcome_nothing)
            ));
        }

        out.push_str(&format!(
            "Creatures generated: {}\n",
            self.creatures_generated
        ));
        out.push_str("  Tier           Count    Share     Avg yield\n");
        for row in &self.tiers {
            out.push_str(&format!(
                "  {:<12} {:>8}  {:>6.2}%  {:>10.1}/h\n",
                row.tier, row.count, row.percent, row.avg_yield
            ));
        }

        out.push_str(&format!(
            "\nMutated creatures: {} ({} mutations total)\n",
            self.mutated_creatures, self.total_mutations
        ));
        out.push_str(&format!("Average yield: {:.1} algae/h\n", self.avg_yield));

        out
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> SimReport {
        let mut tier_counts = [0u64; Rarity::COUNT];
        tier_counts[Rarity::Common as usize] = 60;
        tier_counts[Rarity::Legendary as usize] = 40;
        let mut tier_yields = [0.0; Rarity::COUNT];
        tier_yields[Rarity::Common as usize] = 600.0;
        tier_yields[Rarity::Legendary as usize] = 2000.0;

        SimReport::from_tallies(
            "fishing".to_string(),
            1000,
            Some(42),
            (100, 500, 400),
            tier_counts,
            tier_yields,
            7,
            9,
        )
    }

    #[test]
    fn test_from_tallies_percentages() {
        let report = sample_report();
        assert_eq!(report.creatures_generated, 100);
        let common = &report.tiers[Rarity::Common as usize];
        assert!((common.percent - 60.0).abs() < 1e-9);
        assert!((common.avg_yield - 10.0).abs() < 1e-9);
        let legendary = &report.tiers[Rarity::Legendary as usize];
        assert!((legendary.avg_yield - 50.0).abs() < 1e-9);
        assert!((report.avg_yield - 26.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_batch_has_no_nans() {
        let report = SimReport::from_tallies(
            "fishing".to_string(),
            0,
            None,
            (0, 0, 0),
            [0; Rarity::COUNT],
            [0.0; Rarity::COUNT],
            0,
            0,
        );
        assert_eq!(report.avg_yield, 0.0);
        assert!(report.tiers.iter().all(|t| t.percent == 0.0));
    }

    #[test]
    fn test_text_report_mentions_bands_and_tiers() {
        let text = sample_report().to_text();
        assert!(text.contains("creature"));
        assert!(text.contains("Common"));
        assert!(text.contains("Legendary"));
        assert!(text.contains("Average yield"));
    }

    #[test]
    fn test_json_report_parses_back() {
        let json = sample_report().to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["trials"], 1000);
        assert_eq!(value["tiers"].as_array().unwrap().len(), Rarity::COUNT);
    }
}
