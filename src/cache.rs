//! Read-through file cache, one JSON file per player.
//!
//! A readable, parseable file is authoritative: entries never expire and are
//! only replaced by a new network lookup.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::error::AppError;
use crate::model::PlayerProfile;

/// `<dir>/<lowercased name without whitespace>_<lowercased tag>.json`
pub fn cache_path(dir: impl AsRef<Path>, game_name: &str, tag_line: &str) -> PathBuf {
    let name: String = game_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    dir.as_ref()
        .join(format!("{}_{}.json", name, tag_line.to_lowercase()))
}

/// Whether a cache file exists. Content is not validated.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

pub async fn load(path: &Path) -> Result<PlayerProfile, AppError> {
    let raw = fs::read(path).await?;
    serde_json::from_slice(&raw).map_err(AppError::CacheFormat)
}

/// Write the profile next to its final path, then rename it in place so that
/// readers never observe a partially written file.
pub async fn save(path: &Path, profile: &PlayerProfile) -> Result<(), AppError> {
    let data = serde_json::to_vec_pretty(profile).map_err(AppError::CacheFormat)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let tmp = temp_path(path);
    fs::write(&tmp, data).await?;
    if let Err(e) = fs::rename(&tmp, path).await {
        let _ = fs::remove_file(&tmp).await;
        return Err(e.into());
    }

    debug!("💾 cached {} at {}", profile.identity.riot_id(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
