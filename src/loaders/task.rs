//! In-flight imports keyed by the resource handle that started them

use anyhow::{anyhow, Result};
use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::thread;

use crate::loaders::glb::import_glb;
use crate::resource::{HandleId, ResourceView};
use crate::scene::Scene;

/// Result of one import, tagged with its originating handle
#[derive(Debug)]
pub struct LoadCompletion {
    pub origin: HandleId,
    pub result: Result<Scene>,
}

/// One import running on a worker thread
///
/// Dropping the task abandons the result; the worker finishes decoding and
/// its send fails silently.
#[derive(Debug)]
pub struct LoadTask {
    origin: HandleId,
    rx: oneshot::Receiver<Result<Scene>>,
    finished: bool,
}

impl LoadTask {
    /// Runs `import` over the view's bytes on a new thread
    pub fn spawn<F>(view: ResourceView, import: F) -> Self
    where
        F: FnOnce(&[u8]) -> Result<Scene> + Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let origin = view.id;

        thread::spawn(move || {
            log::debug!("Importing {} ({:?})", view.id, view.name);
            let result = import(&view.bytes[..]);
            let _ = tx.send(result);
        });

        Self {
            origin,
            rx,
            finished: false,
        }
    }

    pub fn origin(&self) -> HandleId {
        self.origin
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Non-blocking check; yields the completion at most once
    pub fn poll(&mut self) -> Option<LoadCompletion> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(None) => None,
            Ok(Some(result)) => Some(self.finish(result)),
            Err(oneshot::Canceled) => Some(self.finish(Err(worker_gone()))),
        }
    }

    fn finish(&mut self, result: Result<Scene>) -> LoadCompletion {
        self.finished = true;
        LoadCompletion {
            origin: self.origin,
            result,
        }
    }
}

impl Future for LoadTask {
    type Output = LoadCompletion;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        match Pin::new(&mut this.rx).poll(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(Ok(result)) => Poll::Ready(this.finish(result)),
            Poll::Ready(Err(oneshot::Canceled)) => Poll::Ready(this.finish(Err(worker_gone()))),
        }
    }
}

fn worker_gone() -> anyhow::Error {
    anyhow!("Import worker exited without a result")
}

/// Starts decoding the view as binary glTF
pub fn spawn_import(view: ResourceView) -> LoadTask {
    LoadTask::spawn(view, import_glb)
}
