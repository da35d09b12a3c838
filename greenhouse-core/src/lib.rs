//! Types and traits for interacting with the Greenhouse API gateway
//!
//! This crate is the client-less half of the Greenhouse admin runtime: the
//! resource model for the Greenhouse custom resources, watch event types,
//! request parameters and builders, and the shared error taxonomy.
//! Everything here is re-exported from the `greenhouse` facade crate.

pub mod kinds;

pub mod metadata;

pub mod object;
pub use object::ObjectList;

pub mod params;
pub use params::{DeleteParams, ListParams, PostParams};

pub mod request;
pub use request::Request;

mod resource;
pub use resource::{GreenhouseResource, API_GROUP, API_VERSION};

pub mod secret_data;

pub mod watch;
pub use watch::WatchEvent;

mod error;
pub use error::{Error, ErrorResponse};

/// Convenient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
