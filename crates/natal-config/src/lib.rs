use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides `[ephemeris].path`.
pub const EPHEMERIS_PATH_ENV: &str = "NATAL_EPHEMERIS_PATH";

const SEARCH_PATHS: &[&str] = &["configs/natal.toml", "../../configs/natal.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct EphemerisSettings {
    pub path: PathBuf,
    pub min_year: i32,
    pub max_year: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NatalConfig {
    pub log_level: String,
    pub ephemeris: EphemerisSettings,
}

impl Default for NatalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            ephemeris: EphemerisSettings {
                path: default_ephemeris_path(),
                min_year: default_min_year(),
                max_year: default_max_year(),
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
    #[serde(default = "default_min_year")]
    min_year: i32,
    #[serde(default = "default_max_year")]
    max_year: i32,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default = "default_log_level")]
    log_level: String,
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ephemeris_path() -> PathBuf {
    PathBuf::from("./se")
}

fn default_min_year() -> i32 {
    1800
}

fn default_max_year() -> i32 {
    2399
}

/// Parse a config document. Missing keys take their defaults.
pub fn parse_config(text: &str) -> anyhow::Result<NatalConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse natal.toml: {e}"))?;
    let eph = root.ephemeris.unwrap_or_else(|| EphemerisToml {
        path: None,
        min_year: default_min_year(),
        max_year: default_max_year(),
    });
    if eph.min_year > eph.max_year {
        anyhow::bail!(
            "ephemeris.min_year ({}) is after ephemeris.max_year ({})",
            eph.min_year,
            eph.max_year
        );
    }
    Ok(NatalConfig {
        log_level: root.log_level,
        ephemeris: EphemerisSettings {
            path: eph.path.unwrap_or_else(default_ephemeris_path),
            min_year: eph.min_year,
            max_year: eph.max_year,
        },
    })
}

/// Load from an explicit file, failing if it cannot be read.
pub fn load_config_from(path: &Path) -> anyhow::Result<NatalConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let config = parse_config(&text)?;
    Ok(apply_env_overrides(config, env::var(EPHEMERIS_PATH_ENV).ok()))
}

/// Try the usual relative locations for `configs/natal.toml`; defaults when
/// none exists.
pub fn load_config() -> anyhow::Result<NatalConfig> {
    let mut config = NatalConfig::default();
    for p in SEARCH_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            config = parse_config(&text)?;
            break;
        }
    }
    Ok(apply_env_overrides(config, env::var(EPHEMERIS_PATH_ENV).ok()))
}

fn apply_env_overrides(mut config: NatalConfig, ephemeris_path: Option<String>) -> NatalConfig {
    if let Some(path) = ephemeris_path.filter(|p| !p.trim().is_empty()) {
        config.ephemeris.path = PathBuf::from(path);
    }
    config
}
