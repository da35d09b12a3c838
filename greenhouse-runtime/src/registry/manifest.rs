//! The asset manifest mapping logical panel names to versioned bundles.

use async_trait::async_trait;
use serde::Deserialize;
use std::{collections::BTreeMap, sync::Arc};
use thiserror::Error;
use tokio::sync::OnceCell;

/// Well-known manifest location relative to the assets host
pub const MANIFEST_PATH: &str = "/manifest.json";

/// The version pointer used when no explicit version is requested
pub const LATEST: &str = "latest";

/// Boxed error type for collaborator fetch failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures resolving or fetching the manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest document could not be retrieved
    #[error("manifest fetch failed: {0}")]
    Fetch(#[source] BoxError),

    /// The requested app is not present in the manifest
    #[error("app {app:?} not found in manifest")]
    UnknownApp {
        /// The requested app name
        app: String,
    },

    /// The requested (or `latest`) version is not present for the app
    #[error("version {version:?} of app {app:?} not found in manifest")]
    UnknownVersion {
        /// The requested app name
        app: String,
        /// The version that could not be resolved
        version: String,
    },

    /// The resolved entry names no loadable bundle
    #[error("version {version:?} of app {app:?} has no bundle path")]
    MissingLocation {
        /// The requested app name
        app: String,
        /// The resolved version
        version: String,
    },
}

/// One loadable bundle in the manifest
#[derive(Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Bundle directory path
    #[serde(default)]
    pub path: Option<String>,

    /// Explicit entry file, used by older publishes instead of `path`
    #[serde(default)]
    pub entry_file: Option<String>,
}

impl ManifestEntry {
    /// The loadable location of the bundle, whichever field names it
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.path.as_deref().or(self.entry_file.as_deref())
    }
}

/// An app+version resolved against the manifest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedEntry<'a> {
    /// The concrete version the request resolved to
    pub version: &'a str,
    /// The bundle entry
    pub entry: &'a ManifestEntry,
}

/// The manifest document: app name to version to bundle
///
/// Immutable once fetched; see [`ManifestCache`].
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(transparent)]
pub struct Manifest {
    apps: BTreeMap<String, BTreeMap<String, ManifestEntry>>,
}

impl Manifest {
    /// Resolve an app to a concrete bundle
    ///
    /// Falls back to the [`LATEST`] pointer when no explicit version is
    /// requested. An explicitly requested version must exist; there is no
    /// silent fallback from a pinned version.
    pub fn resolve(&self, app: &str, version: Option<&str>) -> Result<ResolvedEntry<'_>, ManifestError> {
        let versions = self.apps.get(app).ok_or_else(|| ManifestError::UnknownApp {
            app: app.to_string(),
        })?;
        let requested = version.unwrap_or(LATEST);
        let (version, entry) =
            versions
                .get_key_value(requested)
                .ok_or_else(|| ManifestError::UnknownVersion {
                    app: app.to_string(),
                    version: requested.to_string(),
                })?;
        Ok(ResolvedEntry { version, entry })
    }
}

/// Collaborator that retrieves the manifest document from the assets host
#[async_trait]
pub trait ManifestSource: Send + Sync {
    /// Fetch and deserialize the manifest
    async fn fetch(&self) -> Result<Manifest, BoxError>;
}

/// Fetches the manifest at most once per process lifetime
///
/// The first successful fetch is cached forever; concurrent first calls
/// share one in-flight request. A failed fetch is not cached, so a manual
/// reload retries it.
pub struct ManifestCache {
    source: Box<dyn ManifestSource>,
    cell: OnceCell<Arc<Manifest>>,
}

impl ManifestCache {
    /// Wrap a manifest source in a process-lifetime cache
    pub fn new(source: impl ManifestSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cell: OnceCell::new(),
        }
    }

    /// The manifest, fetched on first use
    pub async fn get(&self) -> Result<Arc<Manifest>, ManifestError> {
        self.cell
            .get_or_try_init(|| async {
                self.source
                    .fetch()
                    .await
                    .map(Arc::new)
                    .map_err(ManifestError::Fetch)
            })
            .await
            .cloned()
    }
}
