//! The Greenhouse custom resource kinds the admin console operates on.
//!
//! Each kind is a plain serde struct with `metadata`, a `spec` (desired
//! state) and, where the gateway reports one, a `status` (observed state
//! with a condition list).

mod cluster;
mod plugin;
mod plugin_definition;
mod secret;
mod team_membership;

pub use cluster::{Cluster, ClusterAccessMode, ClusterSpec, ClusterStatus};
pub use plugin::{OptionValue, Plugin, PluginSpec, PluginStatus, SecretKeySelector, ValueFromSource};
pub use plugin_definition::{
    OptionDefinition, OptionType, PluginDefinition, PluginDefinitionSpec, UiApplicationReference,
};
pub use secret::Secret;
pub use team_membership::{TeamMembership, TeamMembershipSpec, TeamMembershipStatus, User};
