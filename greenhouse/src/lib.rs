//! Greenhouse is an umbrella-crate for the runtime underneath the
//! Greenhouse administrative console.
//!
//! # Overview
//!
//! The console is composed of independently built admin panels (cluster,
//! plugin, secret, team and org administration) mounted into a host
//! shell, all backed by CRUD and watch operations against Greenhouse
//! custom resources served by a REST/watch gateway.
//!
//! The main modules are:
//!
//! - [`core`](crate::core) with the resource model, watch events and
//!   gateway request building
//! - [`runtime`](crate::runtime) with the watched-collection
//!   [`Store`](crate::runtime::Store) / [`reflector`](crate::runtime::reflector()),
//!   the panel [`registry`](crate::runtime::registry), the cross-context
//!   [`Channel`](crate::runtime::Channel), shell composition and the
//!   typed [`edit`](crate::runtime::edit) functions
//!
//! # Watching a collection
//! ```no_run
//! use futures::StreamExt;
//! use greenhouse::{
//!     core::{kinds::Cluster, ListParams},
//!     runtime::{reflector, store, Gateway, WatchStreamExt},
//! };
//!
//! # async fn example(gateway: impl Gateway) -> Result<(), greenhouse::core::Error> {
//! let (reader, writer) = store::<Cluster>();
//! let events = gateway.watch("my-org", &ListParams::default(), "0").await?;
//!
//! // pass `reader` to the view layer as state, then drive the stream
//! let mut applied = std::pin::pin!(reflector(writer, events).applied_objects());
//! while let Some(cluster) = applied.next().await {
//!     println!("saw {:?}", cluster?.metadata.name);
//! }
//! # Ok(())
//! # }
//! ```

pub use greenhouse_core as core;
pub use greenhouse_runtime as runtime;

pub use crate::core::{Error, ErrorResponse, GreenhouseResource, ListParams, ObjectList, WatchEvent};
pub use crate::runtime::{reflector::Store, Channel, Gateway, PanelHost, PanelRegistry};

#[cfg(test)]
mod tests {
    use crate::{
        core::{kinds::Plugin, WatchEvent},
        runtime::{
            edit,
            reflector::store,
            shell::{initial_active, PanelConfig, PanelConfigSpec},
        },
    };
    use serde_json::json;

    // The facade should cover a panel's whole read path: reconcile watch
    // events into a store, then shape the result for display.
    #[test]
    fn store_feeds_detail_view_helpers() {
        let plugin: Plugin = serde_json::from_value(json!({
            "metadata": {"name": "test"},
            "spec": {
                "optionValues": [
                    {"name": "value1", "value": true},
                    {"name": "greenhouse.value2", "value": "hidden"},
                ],
            },
        }))
        .unwrap();

        let (reader, mut writer) = store::<Plugin>();
        writer.apply(&WatchEvent::Added(vec![plugin]));

        let state = reader.state();
        let visible = edit::visible_options(&state[0]);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "value1");
    }

    #[test]
    fn shell_boots_with_the_lightest_panel() {
        let configs: Vec<PanelConfig> = [("clusters", 9), ("plugins", 0), ("teams", 1)]
            .into_iter()
            .map(|(id, weight)| {
                PanelConfig::new(PanelConfigSpec {
                    id: Some(id.to_string()),
                    name: Some(id.to_string()),
                    weight: Some(weight),
                    ..PanelConfigSpec::default()
                })
                .unwrap()
            })
            .collect();
        assert_eq!(initial_active(&configs, None).unwrap().id, "plugins");
    }
}
