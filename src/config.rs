//! Deployment configuration describing the remote asset host pool.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "cdn_assets.config.json";

/// Placeholder substituted with the shard index in multi-host patterns.
pub const SHARD_PLACEHOLDER: &str = "%d";

/// Discoverable deployment configuration for remote asset resolution.
///
/// Every field is optional in the JSON representation; missing fields fall
/// back to the defaults documented in the README.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Host pattern for asset requests. A literal host serves everything
    /// itself; a pattern containing `%d` is expanded per shard index.
    pub asset_host: String,
    /// Inclusive lower bound of the shard index range.
    pub num_hosts_min: u32,
    /// Inclusive upper bound of the shard index range.
    pub num_hosts_max: u32,
    /// Dedicated host used when the current request is served over TLS.
    pub ssl_host: String,
    /// Image directory relative to the web root, mirrored remotely.
    pub img_dir: String,
    /// Script directory relative to the web root, mirrored remotely.
    pub js_dir: String,
    /// Stylesheet directory relative to the web root, mirrored remotely.
    pub css_dir: String,
    /// Local web root holding the asset mirror used for timestamp lookups.
    pub webroot: String,
    /// Always append the cache-busting timestamp suffix.
    pub force_timestamp: bool,
    /// Substitute pre-compressed `.gz.` variants for gzip-capable clients.
    pub remote_compressed_files: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            asset_host: "assets%d.example.com".into(),
            num_hosts_min: 0,
            num_hosts_max: 3,
            ssl_host: "sslhost.example.com".into(),
            img_dir: "img".into(),
            js_dir: "js".into(),
            css_dir: "css".into(),
            webroot: "webroot".into(),
            force_timestamp: false,
            remote_compressed_files: false,
        }
    }
}

impl ResolverConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so rendering can continue with sensible
    /// assumptions.
    pub fn discover(base_dir: &Path) -> Self {
        let candidate = base_dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|err| ConfigError::Io {
            path: path.to_path_buf(),
            source: err,
        })?;

        serde_json::from_str(&contents).map_err(|err| ConfigError::Parse {
            path: path.to_path_buf(),
            source: err,
        })
    }

    /// Number of distinct shard indices in the configured host pool.
    ///
    /// The pool spans the inclusive range `num_hosts_min..=num_hosts_max`;
    /// an inverted range degrades to a single shard rather than failing the
    /// render.
    pub fn shard_count(&self) -> u32 {
        if self.num_hosts_max < self.num_hosts_min {
            return 1;
        }

        self.num_hosts_max - self.num_hosts_min + 1
    }
}

/// Errors that can occur while loading an explicit configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the JSON configuration file.
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Parse { path, source } => {
                write!(f, "failed to parse {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}
