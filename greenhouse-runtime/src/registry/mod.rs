//! Panel registry and mount lifecycle.
//!
//! Each admin module ("panel") is an independently built unit implementing
//! the [`Panel`] capability contract. Panels are resolved through an
//! explicit [`PanelRegistry`] and activated by a [`PanelHost`], which owns
//! at most one mounted instance per slot and carries the manual-reload
//! affordance for mount failures.

pub mod manifest;

pub use manifest::{BoxError, Manifest, ManifestCache, ManifestEntry, ManifestError, ManifestSource};

use ahash::AHashMap;
use async_trait::async_trait;
use thiserror::Error;

/// Failures mounting a panel
///
/// None of these are retried automatically; the console surfaces them once
/// with a "Reload" affordance wired to [`PanelHost::remount`].
#[derive(Error, Debug)]
pub enum PanelError {
    /// The manifest could not be fetched or the app/version resolved
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// The app resolved in the manifest but no implementation is registered
    #[error("no panel registered for app {app:?}")]
    Unregistered {
        /// The requested app name
        app: String,
    },

    /// The panel's own mount call failed
    #[error("panel {app:?} failed to mount: {source}")]
    Mount {
        /// The app that failed
        app: String,
        /// The panel's error
        #[source]
        source: BoxError,
    },

    /// Remount was requested with nothing ever mounted
    #[error("no previous mount to reload")]
    NothingMounted,
}

/// Everything a panel receives at mount time
#[derive(Clone, Debug)]
pub struct MountContext {
    /// The logical app name being mounted
    pub app: String,
    /// The concrete bundle version resolved from the manifest
    pub version: String,
    /// Location of the bundle assets
    pub asset_path: String,
    /// 0 for the first mount, incremented by each manual reload
    pub attempt: u32,
    /// Module-specific mount properties
    pub props: serde_json::Value,
}

/// The capability contract every loadable panel implements
#[async_trait]
pub trait Panel: Send {
    /// Activate the panel into its slot
    ///
    /// Called at most once per instance; a failed mount discards the
    /// instance.
    async fn mount(&mut self, ctx: &MountContext) -> Result<(), BoxError>;

    /// Deactivate the panel and release everything `mount` acquired
    fn unmount(&mut self);
}

/// Constructor for panel instances
pub type PanelFactory = Box<dyn Fn() -> Box<dyn Panel> + Send + Sync>;

/// Explicit name-to-implementation registry for panels
///
/// Replaces ambient module caching: hosts resolve implementations only
/// through a registry instance they were handed.
#[derive(Default)]
pub struct PanelRegistry {
    factories: AHashMap<String, PanelFactory>,
}

impl PanelRegistry {
    /// Creates an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under a logical app name
    ///
    /// Re-registering a name replaces the previous factory.
    pub fn register<P, F>(&mut self, app: &str, factory: F)
    where
        P: Panel + 'static,
        F: Fn() -> P + Send + Sync + 'static,
    {
        self.factories.insert(
            app.to_string(),
            Box::new(move || Box::new(factory()) as Box<dyn Panel>),
        );
    }

    /// Registered app names, for diagnostics
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    fn resolve(&self, app: &str) -> Option<&PanelFactory> {
        self.factories.get(app)
    }
}

#[derive(Clone)]
struct MountRequest {
    app: String,
    version: Option<String>,
    props: serde_json::Value,
    attempt: u32,
}

struct MountedPanel {
    app: String,
    panel: Box<dyn Panel>,
}

/// Owns one panel slot and drives the mount/unmount lifecycle
pub struct PanelHost {
    registry: PanelRegistry,
    manifest: ManifestCache,
    mounted: Option<MountedPanel>,
    last: Option<MountRequest>,
}

impl PanelHost {
    /// Creates a host resolving panels through `registry` and bundles through `manifest`
    #[must_use]
    pub fn new(registry: PanelRegistry, manifest: ManifestCache) -> Self {
        Self {
            registry,
            manifest,
            mounted: None,
            last: None,
        }
    }

    /// Mounts an app into the slot, unmounting any previous occupant first
    ///
    /// `version: None` resolves through the manifest's `latest` pointer.
    /// Failures are logged and returned once; retrying is a user action
    /// (see [`PanelHost::remount`]).
    pub async fn mount(
        &mut self,
        app: &str,
        version: Option<&str>,
        props: serde_json::Value,
    ) -> Result<(), PanelError> {
        self.mount_request(MountRequest {
            app: app.to_string(),
            version: version.map(ToString::to_string),
            props,
            attempt: 0,
        })
        .await
    }

    /// Re-runs the last mount request with an incremented attempt counter
    ///
    /// This is the "Reload" affordance surfaced next to a failed panel.
    pub async fn remount(&mut self) -> Result<(), PanelError> {
        let mut request = self.last.clone().ok_or(PanelError::NothingMounted)?;
        request.attempt += 1;
        self.mount_request(request).await
    }

    /// Unmounts the current occupant, if any
    pub fn unmount(&mut self) {
        if let Some(mut mounted) = self.mounted.take() {
            tracing::debug!(app = %mounted.app, "unmounting panel");
            mounted.panel.unmount();
        }
    }

    /// The app currently occupying the slot, if any
    #[must_use]
    pub fn mounted(&self) -> Option<&str> {
        self.mounted.as_ref().map(|m| m.app.as_str())
    }

    async fn mount_request(&mut self, request: MountRequest) -> Result<(), PanelError> {
        self.unmount();
        self.last = Some(request.clone());
        match self.try_mount(&request).await {
            Ok(panel) => {
                tracing::debug!(app = %request.app, attempt = request.attempt, "panel mounted");
                self.mounted = Some(MountedPanel {
                    app: request.app,
                    panel,
                });
                Ok(())
            }
            Err(err) => {
                tracing::warn!(app = %request.app, attempt = request.attempt, error = %err, "panel mount failed");
                Err(err)
            }
        }
    }

    async fn try_mount(&self, request: &MountRequest) -> Result<Box<dyn Panel>, PanelError> {
        let manifest = self.manifest.get().await?;
        let resolved = manifest.resolve(&request.app, request.version.as_deref())?;
        let asset_path = resolved
            .entry
            .location()
            .ok_or_else(|| ManifestError::MissingLocation {
                app: request.app.clone(),
                version: resolved.version.to_string(),
            })?
            .to_string();
        let factory = self
            .registry
            .resolve(&request.app)
            .ok_or_else(|| PanelError::Unregistered {
                app: request.app.clone(),
            })?;
        let mut panel = factory();
        let ctx = MountContext {
            app: request.app.clone(),
            version: resolved.version.to_string(),
            asset_path,
            attempt: request.attempt,
            props: request.props.clone(),
        };
        panel.mount(&ctx).await.map_err(|source| PanelError::Mount {
            app: request.app.clone(),
            source,
        })?;
        Ok(panel)
    }
}
