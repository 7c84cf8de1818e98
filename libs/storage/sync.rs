use crate::remote::RemoteMirror;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use worklane_storage_core::Collection;

pub struct PushJob {
    pub collection: Collection,
    pub payload: String,
}

/// Background worker that forwards collection writes to the remote mirror.
/// Pushes are fire-and-forget: nothing is retried and a failed push is only
/// logged. Dropping the handle's sender ends the worker after the queue
/// drains, which is how [`MirrorHandle::shutdown`] flushes before exit.
pub struct MirrorHandle {
    tx: mpsc::UnboundedSender<PushJob>,
    worker: JoinHandle<()>,
}

impl MirrorHandle {
    pub fn spawn(mirror: RemoteMirror) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel::<PushJob>();
        let worker = tokio::spawn(async move {
            while let Some(job) = rx.recv().await {
                let key = job.collection.key();
                if let Err(err) = mirror.push(key, job.payload).await {
                    tracing::warn!("mirror push for '{key}' dropped: {err}");
                }
            }
        });
        MirrorHandle { tx, worker }
    }

    /// Enqueue a push; never blocks the caller. A closed worker means we are
    /// shutting down and the write is lost, same as any other failed push.
    pub fn enqueue(&self, collection: Collection, payload: String) {
        let _ = self.tx.send(PushJob {
            collection,
            payload,
        });
    }

    /// Drain outstanding pushes. Short-lived processes call this before exit
    /// so queued writes are not cut off mid-flight.
    pub async fn shutdown(self) {
        drop(self.tx);
        let _ = self.worker.await;
    }
}
