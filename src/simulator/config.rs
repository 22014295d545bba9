//! Simulation configuration.

use crate::eggs::EggGrade;

/// Configuration for a batch of reward-engine trials.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of casts (or hatches) to roll
    pub trials: u64,

    /// Random seed for reproducibility (None = entropy)
    pub seed: Option<u64>,

    /// Simulate hatching this egg grade instead of plain fishing
    pub egg_grade: Option<EggGrade>,

    /// Log verbosity (0 = report only, 1 = banner + report)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            trials: 100_000,
            seed: None,
            egg_grade: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short human label for the configured mode.
    pub fn mode_label(&self) -> String {
        match self.egg_grade {
            Some(grade) => format!("hatch ({})", grade.name()),
            None => "fishing".to_string(),
        }
    }
}
