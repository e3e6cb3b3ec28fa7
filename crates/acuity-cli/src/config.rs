use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const CONFIG_FILE: &str = "config.json";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "ACUITY_CONFIG_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcuityConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Default operator recorded on finalized triage records.
    pub operator_id: String,
    #[serde(default)]
    pub station: Option<String>,
    #[serde(default)]
    pub log_format: LogFormat,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl AcuityConfig {
    pub fn new(operator_id: impl Into<String>, station: Option<String>) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            operator_id: operator_id.into(),
            station,
            log_format: LogFormat::default(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// `$ACUITY_CONFIG_DIR`, or `acuity/` under the platform config directory.
pub fn config_dir() -> eyre::Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("acuity"))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

pub fn has_config(dir: &Path) -> bool {
    config_path(dir).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<AcuityConfig> {
    let json = read_raw(dir)?;
    let on_disk_version = version_of(&json)?;

    let migrated = migrate(json, on_disk_version)?;
    let config: AcuityConfig = serde_json::from_value(migrated)?;

    // Persist the migrated shape so the next load starts from the current version.
    if on_disk_version < CURRENT_VERSION {
        save_config(dir, &config)?;
    }
    Ok(config)
}

/// The `log_format` field of whatever config is on disk, read without
/// migrating or validating the rest of the file. `Ok(None)` when no config
/// exists or the field is absent.
pub fn log_format_hint(dir: &Path) -> eyre::Result<Option<LogFormat>> {
    if !has_config(dir) {
        return Ok(None);
    }
    let json = read_raw(dir)?;
    match json.get("log_format") {
        Some(value) => Ok(Some(LogFormat::deserialize(value)?)),
        None => Ok(None),
    }
}

fn read_raw(dir: &Path) -> eyre::Result<serde_json::Value> {
    let path = config_path(dir);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    Ok(serde_json::from_str(&contents)?)
}

/// Missing = 0. Anything that is not a `u32` is rejected rather than truncated.
fn version_of(json: &serde_json::Value) -> eyre::Result<u32> {
    let Some(raw) = json.get("config_version") else {
        return Ok(0);
    };
    raw.as_u64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| eyre::eyre!("config_version {raw} is not a valid version number"))
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update acuity."
        ));
    }

    // v0 → v1: `operator` renamed to `operator_id`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(operator) = obj.remove("operator") {
            obj.entry("operator_id").or_insert(operator);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (renamed operator to operator_id)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &AcuityConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = config_path(dir);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join("config.json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
