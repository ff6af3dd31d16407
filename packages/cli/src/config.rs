use anyhow::{Context, Result};
use blockprint_common::{RealFileSystem, SiteSettings};
use std::path::{Path, PathBuf};

/// Load settings from `--config`, or `blockprint.config.json` in `cwd`
pub fn load_settings(cwd: &str, explicit: Option<&Path>) -> Result<SiteSettings> {
    let fs = RealFileSystem;

    match explicit {
        Some(path) => SiteSettings::load(&fs, path)
            .with_context(|| format!("Failed to load settings from {}", path.display())),
        None => SiteSettings::load_or_default(&fs, Path::new(cwd))
            .with_context(|| format!("Failed to load settings from {}", cwd)),
    }
}

pub fn default_settings_path(cwd: &str) -> PathBuf {
    SiteSettings::default_path(Path::new(cwd))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("blockprint-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = scratch_dir("defaults");
        let settings = load_settings(dir.to_str().unwrap(), None).unwrap();
        assert_eq!(settings, SiteSettings::default());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_reads_config_from_cwd() {
        let dir = scratch_dir("cwd");
        fs::write(
            default_settings_path(dir.to_str().unwrap()),
            r#"{ "typography": { "fluid": true } }"#,
        )
        .unwrap();

        let settings = load_settings(dir.to_str().unwrap(), None).unwrap();
        assert!(settings.typography.fluid);
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_explicit_missing_config_is_error() {
        let dir = scratch_dir("explicit");
        let missing = dir.join("nope.json");
        let err = load_settings(dir.to_str().unwrap(), Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to load settings"));
        fs::remove_dir_all(dir).ok();
    }
}
