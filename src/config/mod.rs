//! Configuration loaded from `.gradecalc.toml`.
//!
//! Every key is optional; a missing file means defaults throughout.
//!
//! ```toml
//! [weights]
//! exams = 0.4
//! oral = 0.5
//! presentation = 0.1
//!
//! [display]
//! placeholder = "-"
//! ```

mod core;
mod display;
mod loader;
mod weights;

pub use self::core::GradecalcConfig;
pub use display::{default_placeholder, DisplayConfig};
pub use loader::{
    ancestor_config_paths, config_search_paths, directory_ancestors, discover_config,
    first_valid_config, load_config, load_config_from, parse_and_validate_config,
    user_config_path, CONFIG_FILE_NAME,
};
pub use weights::{
    default_exams_weight, default_oral_weight, default_presentation_weight, AssessmentWeights,
};
