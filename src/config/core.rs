use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;
use super::weights::AssessmentWeights;

/// Root configuration structure for gradecalc
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GradecalcConfig {
    /// Assessment group weights
    #[serde(default)]
    pub weights: AssessmentWeights,

    /// Result screen display options
    #[serde(default)]
    pub display: DisplayConfig,
}
