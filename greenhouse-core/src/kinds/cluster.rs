use crate::{
    metadata::{Condition, ObjectMeta},
    resource::GreenhouseResource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Kubernetes cluster onboarded into the organization
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Desired state
    #[serde(default)]
    pub spec: ClusterSpec,

    /// Observed state reported by the cluster controller
    #[serde(default)]
    pub status: ClusterStatus,
}

/// How the organization reaches the cluster
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ClusterAccessMode {
    /// Access through a kubeconfig uploaded at onboarding time
    #[default]
    Direct,
    /// Access brokered through the platform's headscale network
    Headscale,
}

/// Desired state of a [`Cluster`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterSpec {
    /// How the cluster is reached
    #[serde(default)]
    pub access_mode: ClusterAccessMode,

    /// When the onboarded kubeconfig's credentials expire
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kube_config_valid_until: Option<DateTime<Utc>>,
}

/// Observed state of a [`Cluster`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClusterStatus {
    /// Kubernetes server version of the remote cluster
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,

    /// Status conditions, including `Ready`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_conditions: Vec<Condition>,
}

impl GreenhouseResource for Cluster {
    const KIND: &'static str = "Cluster";
    const PLURAL: &'static str = "clusters";

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
