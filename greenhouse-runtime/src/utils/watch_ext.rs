use crate::{
    reflector::store::Writer,
    utils::{EventFlatten, Reflect},
};
use futures::Stream;
use greenhouse_core::{Error, GreenhouseResource, WatchEvent};

/// Extension trait for watch event streams
pub trait WatchStreamExt: Stream {
    /// Flatten a batched event stream, skipping deletions
    ///
    /// Yields every object that was added or modified, one at a time.
    fn applied_objects<K>(self) -> EventFlatten<Self, K>
    where
        Self: Stream<Item = Result<WatchEvent<K>, Error>> + Sized,
    {
        EventFlatten::new(self, false)
    }

    /// Flatten a batched event stream, including deletions
    ///
    /// Yields every object mentioned by any event, one at a time.
    fn touched_objects<K>(self) -> EventFlatten<Self, K>
    where
        Self: Stream<Item = Result<WatchEvent<K>, Error>> + Sized,
    {
        EventFlatten::new(self, true)
    }

    /// Apply every event to a store [`Writer`] while passing it through
    ///
    /// A combinator form of [`reflector`](crate::reflector::reflector).
    fn reflect<K>(self, writer: Writer<K>) -> Reflect<Self, K>
    where
        Self: Stream<Item = Result<WatchEvent<K>, Error>> + Sized,
        K: GreenhouseResource + Clone + PartialEq,
    {
        Reflect::new(self, writer)
    }
}

impl<St: ?Sized> WatchStreamExt for St where St: Stream {}
