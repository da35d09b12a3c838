use core::{
    pin::Pin,
    task::{Context, Poll},
};
use futures::{ready, Stream};
use greenhouse_core::{Error, GreenhouseResource, WatchEvent};
use pin_project::pin_project;

use crate::reflector::store::Writer;

/// Stream returned by the [`reflect`](super::WatchStreamExt::reflect) method
#[pin_project]
#[must_use = "streams do nothing unless polled"]
pub struct Reflect<St, K>
where
    K: GreenhouseResource + Clone + PartialEq,
{
    #[pin]
    stream: St,
    writer: Writer<K>,
}

impl<St, K> Reflect<St, K>
where
    St: Stream<Item = Result<WatchEvent<K>, Error>>,
    K: GreenhouseResource + Clone + PartialEq,
{
    pub(super) fn new(stream: St, writer: Writer<K>) -> Reflect<St, K> {
        Self { stream, writer }
    }
}

impl<St, K> Stream for Reflect<St, K>
where
    St: Stream<Item = Result<WatchEvent<K>, Error>>,
    K: GreenhouseResource + Clone + PartialEq,
{
    type Item = Result<WatchEvent<K>, Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let me = self.project();
        Poll::Ready(match ready!(me.stream.poll_next(cx)) {
            Some(Ok(event)) => {
                me.writer.apply(&event);
                Some(Ok(event))
            }
            Some(Err(err)) => Some(Err(err)),
            None => None,
        })
    }
}
