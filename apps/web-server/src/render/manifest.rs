//! Hashed asset manifest produced by the front-end build.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const STYLESHEET: (&str, &str) = ("main.css", "assets/app.css");
const MAIN_SCRIPT: (&str, &str) = ("main.js", "assets/app.js");
const VENDOR_SCRIPT: (&str, &str) = ("vendors.js", "assets/vendor.js");

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Logical asset name -> content-hashed path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Manifest(HashMap<String, String>);

impl Manifest {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let raw = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Manifest {
    fn from(entries: [(&str, &str); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

/// Asset paths referenced by the HTML document.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct AssetPaths {
    pub stylesheet: String,
    pub main_script: String,
    pub vendor_script: String,
}

impl AssetPaths {
    /// Resolve from the manifest, entry by entry, falling back to the
    /// unhashed defaults.
    pub fn resolve(manifest: Option<&Manifest>) -> Self {
        let pick = |(name, default): (&str, &str)| {
            manifest
                .and_then(|m| m.get(name))
                .unwrap_or(default)
                .to_string()
        };
        Self {
            stylesheet: pick(STYLESHEET),
            main_script: pick(MAIN_SCRIPT),
            vendor_script: pick(VENDOR_SCRIPT),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::resolve(None)
    }
}
