// src/analysis/classify.rs
//! Three-tier migration classification.

use serde::{Deserialize, Serialize};

use super::blast::BlastRadius;

/// Migration bucket for one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Classification {
    Green,
    Yellow,
    Red,
}

impl Classification {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Yellow => "YELLOW",
            Self::Red => "RED",
        }
    }
}

/// Classification thresholds. The precedence ladder in [`classify`] is
/// fixed; only the cut points are configurable.
#[derive(Debug, Clone)]
pub struct ClassifyConfig {
    pub red_risk: u32,
    pub red_blast_pct: f64,
    pub yellow_risk: u32,
    pub yellow_blast_pct: f64,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            red_risk: 60,
            red_blast_pct: 50.0,
            yellow_risk: 30,
            yellow_blast_pct: 20.0,
        }
    }
}

/// First match wins: RED on cycle membership, high risk, or wide blast
/// radius; YELLOW on moderate risk or blast; GREEN otherwise.
#[must_use]
pub fn classify(
    risk_score: u32,
    blast: &BlastRadius,
    in_cycle: bool,
    config: &ClassifyConfig,
) -> Classification {
    if in_cycle || risk_score >= config.red_risk || blast.percentage >= config.red_blast_pct {
        return Classification::Red;
    }
    if risk_score >= config.yellow_risk || blast.percentage >= config.yellow_blast_pct {
        return Classification::Yellow;
    }
    Classification::Green
}
