use crate::{
    metadata::{Condition, ObjectMeta},
    resource::GreenhouseResource,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The resolved member list of a team within the organization
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    /// Standard object metadata
    #[serde(default)]
    pub metadata: ObjectMeta,

    /// Desired state
    #[serde(default)]
    pub spec: TeamMembershipSpec,

    /// Observed state reported by the team controller
    #[serde(default)]
    pub status: TeamMembershipStatus,
}

/// Desired state of a [`TeamMembership`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipSpec {
    /// Users belonging to the team
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<User>,
}

/// Observed state of a [`TeamMembership`]
#[derive(Deserialize, Serialize, Clone, Default, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembershipStatus {
    /// When the member list was last synced from the identity provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_synced_time: Option<DateTime<Utc>>,

    /// Status conditions, including `Ready`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_conditions: Vec<Condition>,
}

/// A single team member
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity provider user id
    pub id: String,
    /// Given name
    #[serde(default)]
    pub first_name: String,
    /// Family name
    #[serde(default)]
    pub last_name: String,
    /// Primary email address
    #[serde(default)]
    pub email: String,
}

impl GreenhouseResource for TeamMembership {
    const KIND: &'static str = "TeamMembership";
    const PLURAL: &'static str = "teammemberships";

    fn meta(&self) -> &ObjectMeta {
        &self.metadata
    }

    fn meta_mut(&mut self) -> &mut ObjectMeta {
        &mut self.metadata
    }
}
