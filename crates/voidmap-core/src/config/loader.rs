use std::path::PathBuf;

use super::Config;

/// Returns the config directory: `~/.config/voidmap/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("voidmap"))
}

/// Returns the config file path: `~/.config/voidmap/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Tries to load and parse `config.toml`.
///
/// Returns `Ok(Config)` on success, or an error string describing
/// what went wrong (IO error, parse error, etc.).
pub fn try_load() -> Result<Config, String> {
    let path = config_path().ok_or("could not determine config path")?;
    let content = std::fs::read_to_string(&path).map_err(|e| format!("{}: {e}", path.display()))?;
    parse(&content).map_err(|e| format!("{}: {e}", path.display()))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// After loading, values are clamped to safe ranges via [`Config::validate`].
/// A missing file silently returns defaults; other errors are printed.
pub fn load() -> Config {
    let missing = config_path().is_none_or(|p| !p.exists());
    load_or_default(missing, try_load, Config::default)
}

/// Parses config text and clamps it.
pub(crate) fn parse(content: &str) -> Result<Config, String> {
    let mut config: Config = toml::from_str(content).map_err(|e| e.to_string())?;
    config.validate();
    Ok(config)
}

fn load_or_default<T>(
    missing: bool,
    try_load: impl FnOnce() -> Result<T, String>,
    default: impl Fn() -> T,
) -> T {
    if missing {
        return default();
    }
    match try_load() {
        Ok(val) => val,
        Err(e) => {
            eprintln!("Warning: {e}");
            default()
        }
    }
}
