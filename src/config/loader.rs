use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::GradecalcConfig;
use crate::core::{Error, Result};

/// Name of the config file searched for in the working directory and its ancestors
pub const CONFIG_FILE_NAME: &str = ".gradecalc.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<GradecalcConfig> {
    let config = toml::from_str::<GradecalcConfig>(contents).map_err(|e| {
        Error::configuration(format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))
    })?;

    config
        .weights
        .validate()
        .and_then(|()| config.display.validate())
        .map_err(Error::configuration)?;

    Ok(config)
}

/// Load an explicitly requested config file. Missing or invalid files are errors.
pub fn load_config_from(path: &Path) -> Result<GradecalcConfig> {
    let contents = read_config_file(path).map_err(|e| Error::file_system(path, e))?;
    let config = parse_and_validate_config(&contents)?;
    tracing::debug!("Loaded config from {}", path.display());
    Ok(config)
}

/// Try loading a discovered config file; problems are logged and skipped.
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<GradecalcConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while walking up the tree
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start`, nearest first, up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// `.gradecalc.toml` in `start` and its ancestors, nearest first.
pub fn ancestor_config_paths(start: PathBuf) -> Vec<PathBuf> {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .collect()
}

/// `gradecalc/config.toml` in the platform's user config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gradecalc").join("config.toml"))
}

/// Candidate config paths: `start` and its ancestors, then the user config directory.
pub fn config_search_paths(start: PathBuf) -> Vec<PathBuf> {
    let mut paths = ancestor_config_paths(start);
    paths.extend(user_config_path());
    paths
}

/// First candidate that exists and validates; unreadable or invalid files are skipped.
pub fn first_valid_config(paths: &[PathBuf]) -> Option<GradecalcConfig> {
    paths.iter().find_map(|path| try_load_config_from_path(path))
}

/// Discover a config starting at `start`, falling back to defaults.
pub fn discover_config(start: PathBuf) -> GradecalcConfig {
    first_valid_config(&config_search_paths(start)).unwrap_or_else(|| {
        tracing::debug!("No config file found. Using default config.");
        GradecalcConfig::default()
    })
}

/// Discover a config from the current working directory.
pub fn load_config() -> GradecalcConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            GradecalcConfig::default()
        }
    }
}
