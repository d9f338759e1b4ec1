//! Background build worker.
//!
//! A dedicated thread owns the builder; callers hand it rebuild requests
//! through a bounded channel. The channel holds at most one pending
//! request, so a burst of triggers coalesces into a single rebuild after
//! the one in flight.

use std::sync::mpsc::{self, SyncSender, TrySendError};
use std::sync::Arc;
use std::thread::JoinHandle;

use tracing::{error, info};

use trellis_core::errors::{BuildError, TrellisError, TrellisResult};

use crate::builder::GraphBuilder;

/// Handle to the background build thread. Dropping it shuts the thread
/// down after any in-flight build finishes.
pub struct BuildWorker {
    sender: Option<SyncSender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl BuildWorker {
    /// Spawn the worker thread around a builder.
    pub fn spawn(builder: Arc<GraphBuilder>) -> TrellisResult<Self> {
        let (sender, receiver) = mpsc::sync_channel::<()>(1);
        let handle = std::thread::Builder::new()
            .name("trellis-build".into())
            .spawn(move || {
                while receiver.recv().is_ok() {
                    match builder.build() {
                        Ok(report) => info!(
                            version = report.version,
                            nodes = report.node_count,
                            edges = report.edge_count,
                            "background build finished"
                        ),
                        Err(TrellisError::Build(BuildError::BuildInProgress)) => {
                            // Another caller drove a build directly; the
                            // queued request is satisfied by it.
                        }
                        Err(e) => error!(error = %e, "background build failed"),
                    }
                }
            })
            .map_err(|e| BuildError::BuildFailed {
                reason: format!("failed to spawn build worker thread: {e}"),
            })?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    /// Request a rebuild without blocking. Returns `true` if the request
    /// was queued, `false` if it coalesced into one already pending.
    pub fn request_build(&self) -> bool {
        match self.sender.as_ref() {
            Some(sender) => match sender.try_send(()) {
                Ok(()) => true,
                Err(TrySendError::Full(())) => false,
                Err(TrySendError::Disconnected(())) => false,
            },
            None => false,
        }
    }
}

impl Drop for BuildWorker {
    fn drop(&mut self) {
        // Closing the channel ends the worker loop.
        self.sender.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
