use crate::error::{CommonError, CommonResult};
use crate::filesystem::FileSystem;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_SETTINGS_NAME: &str = "blockprint.config.json";

/// Site-wide rendering settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default)]
    pub typography: TypographySettings,

    #[serde(default)]
    pub discussion: DiscussionSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographySettings {
    /// Turns custom and preset font sizes into fluid `clamp()` values
    #[serde(default)]
    pub fluid: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionSettings {
    /// Render replies as nested lists
    #[serde(default = "default_thread_comments")]
    pub thread_comments: bool,

    /// Nesting level after which replies are flattened
    #[serde(default = "default_thread_comments_depth")]
    pub thread_comments_depth: u32,

    #[serde(default)]
    pub comment_order: CommentOrder,
}

fn default_thread_comments() -> bool {
    true
}

fn default_thread_comments_depth() -> u32 {
    5
}

impl Default for DiscussionSettings {
    fn default() -> Self {
        Self {
            thread_comments: default_thread_comments(),
            thread_comments_depth: default_thread_comments_depth(),
            comment_order: CommentOrder::default(),
        }
    }
}

/// Order in which top-level comments are displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentOrder {
    #[default]
    Asc,
    Desc,
}

impl std::str::FromStr for CommentOrder {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(CommentOrder::Asc),
            "desc" => Ok(CommentOrder::Desc),
            other => Err(CommonError::Generic(format!(
                "Invalid comment order: {}. Use: asc or desc",
                other
            ))),
        }
    }
}

impl SiteSettings {
    /// Parse settings from JSON text
    pub fn from_json(json: &str) -> CommonResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from an explicit file
    pub fn load<F: FileSystem>(fs: &F, path: &Path) -> CommonResult<Self> {
        if !fs.exists(path) {
            return Err(CommonError::SettingsNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs.read_to_string(path)?;
        let settings = Self::from_json(&content)?;
        debug!(path = %path.display(), "Loaded site settings");
        Ok(settings)
    }

    /// Load `blockprint.config.json` from a directory, falling back to defaults
    pub fn load_or_default<F: FileSystem>(fs: &F, dir: &Path) -> CommonResult<Self> {
        let path = Self::default_path(dir);

        if fs.exists(&path) {
            Self::load(fs, &path)
        } else {
            debug!(dir = %dir.display(), "No settings file found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn default_path(dir: &Path) -> PathBuf {
        dir.join(DEFAULT_SETTINGS_NAME)
    }
}
