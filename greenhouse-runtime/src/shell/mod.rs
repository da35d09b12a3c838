//! Shell composition: panel configuration, the shared panel interaction
//! flow, url state and auth session plumbing.

mod auth;
mod config;
mod flow;
mod url_state;

pub use auth::{await_auth, AuthClaims, AuthSession, AuthWait, AUTH_GIVE_UP_AFTER, AUTH_SLOW_AFTER};
pub use config::{initial_active, split_navigable, ConfigError, PanelConfig, PanelConfigSpec, PanelKind};
pub use flow::PanelFlow;
pub use url_state::UrlState;

use greenhouse_core::kinds::Plugin;
use std::cmp::Ordering;

/// List-view ordering for plugins: disabled entries last, then alphabetical
///
/// Collections arrive from the store in arrival order; views reapply this
/// before rendering.
#[must_use]
pub fn plugin_display_order(a: &Plugin, b: &Plugin) -> Ordering {
    (a.spec.disabled, a.metadata.name.as_deref())
        .cmp(&(b.spec.disabled, b.metadata.name.as_deref()))
}
