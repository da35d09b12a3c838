//! Helpers for composing watch event streams

mod event_flatten;
mod reflect;
mod watch_ext;

pub use event_flatten::EventFlatten;
pub use reflect::Reflect;
pub use watch_ext::WatchStreamExt;
