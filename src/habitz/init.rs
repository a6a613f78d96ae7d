use crate::api::HabitzApi;
use crate::config::HabitzConfig;
use crate::error::{HabitzError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Everything the CLI needs for one invocation.
pub struct HabitzContext {
    pub api: HabitzApi<FileStore>,
    pub config: HabitzConfig,
}

/// Resolve the data root: an explicit override wins, then `$HABITZ_HOME`,
/// then the platform data directory.
pub fn resolve_data_root(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = override_dir {
        return Ok(dir.to_path_buf());
    }
    if let Ok(home) = env::var("HABITZ_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    ProjectDirs::from("com", "habitz", "habitz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| HabitzError::Store("could not determine a data directory".to_string()))
}

/// Builds the application context. Records live under `<root>/habits/`,
/// config at `<root>/config.json`; neither is created until first use.
pub fn initialize(data_dir: Option<&Path>) -> Result<HabitzContext> {
    let root = resolve_data_root(data_dir)?;
    let config = HabitzConfig::load(&root).unwrap_or_default();
    let store = FileStore::new(root.join("habits"));
    let api = HabitzApi::new(store, root);
    Ok(HabitzContext { api, config })
}
