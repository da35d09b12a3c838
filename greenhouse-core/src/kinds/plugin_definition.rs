use crate::{metadata::ObjectMeta, resource::GreenhouseResource};
use serde::{Deserialize, Serialize};

/// A deployable plugin blueprint published into the organization catalog
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginDefinition {
    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Desired state
    #[serde(default)]
    pub spec: PluginDefinitionSpec,
}

/// Desired state of a [`PluginDefinition`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PluginDefinitionSpec {
    /// Name shown in the catalog instead of the object name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Published chart version
    #[serde(default)]
    pub version: String,

    /// Catalog description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Catalog icon, an asset path or symbol name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Frontend bundle deployed alongside the workload, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui_application: Option<UiApplicationReference>,

    /// Options instances of this definition can configure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

/// Reference to the frontend bundle of a plugin definition
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiApplicationReference {
    /// Logical bundle name in the asset manifest
    pub name: String,
    /// Bundle version, `latest` if unpinned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// A configurable option declared by a [`PluginDefinition`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptionDefinition {
    /// Option name instances address it by
    pub name: String,

    /// Label shown in the configuration form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Help text shown in the configuration form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether instances must provide a value
    #[serde(default)]
    pub required: bool,

    /// Value used when an instance provides none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,

    /// Declared value type, drives form control selection and coercion
    #[serde(default, rename = "type")]
    pub type_: OptionType,
}

/// Declared type of an [`OptionDefinition`]
#[derive(Deserialize, Serialize, Clone, Copy, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Free-form string
    #[default]
    String,
    /// Boolean, rendered as a checkbox
    Bool,
    /// Integer, rendered as a number field
    Int,
    /// JSON list, rendered as a textarea
    List,
    /// JSON map, rendered as a textarea
    Map,
    /// Sensitive string, stored in a Secret and referenced
    Secret,
}

impl GreenhouseResource for PluginDefinition {
    const KIND: &'static str = "PluginDefinition";
    const PLURAL: &'static str = "plugindefinitions";

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
