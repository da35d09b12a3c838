use crate::{metadata::ObjectMeta, resource::GreenhouseResource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An opaque secret in the organization namespace
///
/// Mirrors the upstream kind: no spec/status split, and `data` values are
/// base64 encoded on the wire. Use [`crate::secret_data`] to encode and
/// decode the map.
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Secret {
    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Secret type, e.g. `Opaque` or `greenhouse.sap/kubeconfig`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,

    /// Base64-encoded key/value payload
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, String>,
}

impl GreenhouseResource for Secret {
    const KIND: &'static str = "Secret";
    const PLURAL: &'static str = "secrets";

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
