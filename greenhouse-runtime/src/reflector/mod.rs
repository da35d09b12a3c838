//! Caches watched collections in memory

mod object_ref;
pub mod store;

pub use object_ref::ObjectRef;
pub use store::{store, Snapshot, Store, Writer};

use async_stream::stream;
use futures::{Stream, StreamExt};
use greenhouse_core::{GreenhouseResource, WatchEvent};

/// Cache objects from a watch event stream into a local [`Store`]
///
/// Observes the raw `Stream` of [`WatchEvent`] batches, and modifies the
/// cache. It passes the raw stream through unmodified.
///
/// ## Usage
/// Create a [`Store`] through [`store()`]. The `writer` part is not
/// clonable, and must be moved into the reflector. The `reader` part is
/// the [`Store`] interface that you pass to other parts of your module as
/// state.
///
/// The cache contains the last-seen state of objects, which may lag
/// slightly behind the actual state on the gateway.
pub fn reflector<K, W, E>(mut writer: Writer<K>, stream: W) -> impl Stream<Item = W::Item>
where
    K: GreenhouseResource + Clone + PartialEq,
    W: Stream<Item = Result<WatchEvent<K>, E>>,
{
    let mut stream = Box::pin(stream);
    stream! {
        while let Some(event) = stream.next().await {
            match event {
                Ok(ev) => {
                    writer.apply(&ev);
                    yield Ok(ev);
                },
                Err(ev) => yield Err(ev),
            }
        }
    }
}
