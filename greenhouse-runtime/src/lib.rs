//! Runtime components of the Greenhouse admin console
//!
//! This crate contains the building blocks the console's modules share:
//! watch reconciliation into a local [`reflector::Store`], the gateway
//! client seam, the typed cross-context [`bus::Channel`], the panel
//! [`registry`] with its mount/unmount lifecycle, shell composition
//! helpers, and the typed resource [`edit`] functions.

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod bus;
pub mod edit;
pub mod gateway;
pub mod reflector;
pub mod registry;
pub mod shell;
pub mod utils;

pub use bus::Channel;
pub use gateway::Gateway;
pub use reflector::{reflector, store, ObjectRef, Store};
pub use registry::{PanelHost, PanelRegistry};
pub use utils::WatchStreamExt;
