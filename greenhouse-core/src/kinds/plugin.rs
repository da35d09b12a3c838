use crate::{
    metadata::{Condition, ObjectMeta},
    resource::GreenhouseResource,
};
use serde::{Deserialize, Serialize};

/// An instance of a [`PluginDefinition`](super::PluginDefinition) deployed
/// into the organization, optionally targeting an onboarded cluster
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plugin {
    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Desired state
    #[serde(default)]
    pub spec: PluginSpec,

    /// Observed state reported by the plugin controller
    #[serde(default)]
    pub status: PluginStatus,
}

/// Desired state of a [`Plugin`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginSpec {
    /// Name of the PluginDefinition this instance is created from
    #[serde(default)]
    pub plugin_definition: String,

    /// Name shown in list and detail views instead of the object name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Disabled plugins keep their configuration but are not deployed
    #[serde(default)]
    pub disabled: bool,

    /// Name of the onboarded cluster the plugin's workload runs on
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,

    /// Namespace the plugin's helm release is installed into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_namespace: Option<String>,

    /// Values for the options declared by the PluginDefinition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub option_values: Vec<OptionValue>,
}

/// A single configured option value
///
/// Exactly one of `value` and `value_from` is expected to be set; secret
/// kinds are never written inline and always arrive as a `value_from`
/// reference.
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionValue {
    /// The option name as declared by the PluginDefinition
    pub name: String,

    /// Inline value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,

    /// Reference to a value held elsewhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_from: Option<ValueFromSource>,
}

/// Source of an [`OptionValue`] held outside the Plugin resource
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ValueFromSource {
    /// A key in a Secret in the organization namespace
    Secret(SecretKeySelector),
}

/// Selects a key of a Secret
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SecretKeySelector {
    /// Name of the Secret
    pub name: String,
    /// Key within the Secret's data
    pub key: String,
}

/// Observed state of a [`Plugin`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginStatus {
    /// Deployed chart version
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Status conditions, including `Ready`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_conditions: Vec<Condition>,
}

impl GreenhouseResource for Plugin {
    const KIND: &'static str = "Plugin";
    const PLURAL: &'static str = "plugins";

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
