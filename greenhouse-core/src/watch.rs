//! Types for the watch api
//!
//! The gateway multiplexes resource watches over a single connection and
//! batches changes, so every event carries a list of changed items rather
//! than a single object.

use crate::error::ErrorResponse;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A raw event returned from a watch query
#[derive(Deserialize, Serialize, Clone)]
#[serde(tag = "type", content = "objects", rename_all = "UPPERCASE")]
pub enum WatchEvent<K> {
    /// Resources were added
    Added(Vec<K>),
    /// Resources were modified
    Modified(Vec<K>),
    /// Resources were deleted
    Deleted(Vec<K>),
    /// There was some kind of error
    Error(ErrorResponse),
}

impl<K> WatchEvent<K> {
    /// Number of items carried by the event
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            WatchEvent::Added(items) | WatchEvent::Modified(items) | WatchEvent::Deleted(items) => {
                items.len()
            }
            WatchEvent::Error(_) => 0,
        }
    }

    /// Whether the event carries no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> Debug for WatchEvent<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match &self {
            WatchEvent::Added(items) => write!(f, "Added event ({} items)", items.len()),
            WatchEvent::Modified(items) => write!(f, "Modified event ({} items)", items.len()),
            WatchEvent::Deleted(items) => write!(f, "Deleted event ({} items)", items.len()),
            WatchEvent::Error(e) => write!(f, "Error event: {e:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WatchEvent;
    use crate::kinds::Cluster;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn events_are_tagged_uppercase_with_object_lists() {
        let mut cluster = Cluster::default();
        cluster.metadata.name = Some("obs-eu".into());
        let ev = WatchEvent::Added(vec![cluster]);
        assert_json_eq!(
            serde_json::to_value(&ev).unwrap(),
            json!({
                "type": "ADDED",
                "objects": [{"metadata": {"name": "obs-eu"}, "spec": {"accessMode": "direct"}, "status": {}}],
            })
        );
    }

    #[test]
    fn error_events_deserialize_from_gateway_status() {
        let ev: WatchEvent<Cluster> = serde_json::from_value(json!({
            "type": "ERROR",
            "objects": {"status": "Failure", "message": "too old resource version", "reason": "Expired", "code": 410},
        }))
        .unwrap();
        match ev {
            WatchEvent::Error(e) => assert_eq!(e.code, 410),
            _ => panic!("expected error event"),
        }
    }
}
