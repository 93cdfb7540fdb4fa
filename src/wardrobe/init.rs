//! # Data Directory
//!
//! Wardrobe keeps its data in one directory holding `wardrobe.json` and
//! `config.json`. By default this is the OS data directory from the
//! `directories` crate; `WARDROBE_HOME` overrides it, which is what the
//! integration tests use to stay isolated.

use crate::api::WardrobeApi;
use crate::commands::WardrobePaths;
use crate::config::WardrobeConfig;
use crate::error::{Result, WardrobeError};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const HOME_ENV: &str = "WARDROBE_HOME";

pub struct WardrobeContext {
    pub api: WardrobeApi<FileStore>,
    pub config: WardrobeConfig,
}

/// The directory holding the wardrobe and its config.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|dir| !dir.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "wardrobe", "wardrobe")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WardrobeError::Store("Could not determine data directory".into()))
}

/// Loads config and wardrobe from `dir`.
///
/// A broken config file is logged and replaced by defaults, the same way a
/// broken wardrobe is.
pub fn initialize_at(dir: PathBuf) -> WardrobeContext {
    let config = WardrobeConfig::load(&dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not read config, using defaults");
        WardrobeConfig::default()
    });
    let store = FileStore::new(dir.clone());
    let paths = WardrobePaths { data: dir };
    let api = WardrobeApi::load(store, paths, config.page_size());
    WardrobeContext { api, config }
}

pub fn initialize() -> Result<WardrobeContext> {
    Ok(initialize_at(data_dir()?))
}
