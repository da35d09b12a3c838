use core::{
    pin::Pin,
    task::{Context, Poll},
};
use futures::{ready, Stream};
use greenhouse_core::{Error, WatchEvent};
use pin_project::pin_project;

#[pin_project]
/// Stream returned by the [`applied_objects`](super::WatchStreamExt::applied_objects) and
/// [`touched_objects`](super::WatchStreamExt::touched_objects) method.
#[must_use = "streams do nothing unless polled"]
pub struct EventFlatten<St, K> {
    #[pin]
    stream: St,
    emit_deleted: bool,
    queue: std::vec::IntoIter<K>,
}

impl<St: Stream<Item = Result<WatchEvent<K>, Error>>, K> EventFlatten<St, K> {
    pub(super) fn new(stream: St, emit_deleted: bool) -> Self {
        Self {
            stream,
            queue: vec![].into_iter(),
            emit_deleted,
        }
    }
}

impl<St, K> Stream for EventFlatten<St, K>
where
    St: Stream<Item = Result<WatchEvent<K>, Error>>,
{
    type Item = Result<K, Error>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let mut me = self.project();
        Poll::Ready(loop {
            if let Some(item) = me.queue.next() {
                break Some(Ok(item));
            }
            break match ready!(me.stream.as_mut().poll_next(cx)) {
                Some(Ok(WatchEvent::Added(objs) | WatchEvent::Modified(objs))) => {
                    *me.queue = objs.into_iter();
                    continue;
                }
                Some(Ok(WatchEvent::Deleted(objs))) => {
                    if *me.emit_deleted {
                        *me.queue = objs.into_iter();
                    }
                    continue;
                }
                // in-band gateway errors surface like transport errors
                Some(Ok(WatchEvent::Error(err))) => Some(Err(Error::Api(err))),
                Some(Err(err)) => Some(Err(err)),
                None => return Poll::Ready(None),
            };
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{EventFlatten, WatchEvent};
    use futures::{pin_mut, poll, stream, StreamExt};
    use std::task::Poll;

    #[tokio::test]
    async fn flattens_batches_and_skips_deletes() {
        let data = stream::iter([
            Ok(WatchEvent::Added(vec![0, 1])),
            Ok(WatchEvent::Deleted(vec![0])),
            Ok(WatchEvent::Modified(vec![2])),
        ]);
        let rx = EventFlatten::new(data, false);
        pin_mut!(rx);
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(0)))));
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(1)))));
        // NB: no Deleted events here
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(2)))));
        assert!(matches!(poll!(rx.next()), Poll::Ready(None)));
    }

    #[tokio::test]
    async fn emits_deletes_when_asked() {
        let data = stream::iter([
            Ok(WatchEvent::Added(vec![1])),
            Ok(WatchEvent::Deleted(vec![1])),
        ]);
        let rx = EventFlatten::new(data, true);
        pin_mut!(rx);
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(1)))));
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(1)))));
        assert!(matches!(poll!(rx.next()), Poll::Ready(None)));
    }

    #[tokio::test]
    async fn surfaces_inband_errors() {
        let data = stream::iter([
            Ok(WatchEvent::Added(vec![1])),
            Ok(WatchEvent::Error(greenhouse_core::ErrorResponse {
                status: "Failure".into(),
                message: "expired".into(),
                reason: "Expired".into(),
                code: 410,
            })),
            Ok(WatchEvent::Added(vec![2])),
        ]);
        let rx = EventFlatten::new(data, false);
        pin_mut!(rx);
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(1)))));
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Err(_)))));
        assert!(matches!(poll!(rx.next()), Poll::Ready(Some(Ok(2)))));
    }
}
