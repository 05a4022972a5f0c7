use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::server::listener::Listener;
use crate::static_files::StaticFiles;

const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

/// A fixed set of workers, each looping accept → handle → close against
/// the shared listener. No queue sits between them: a worker busy with a
/// connection simply is not accepting, so at most `workers` connections are
/// in flight and the rest wait in the accept backlog.
pub struct WorkerPool {
    listener: Arc<Listener>,
    files: Arc<StaticFiles>,
    workers: usize,
}

impl WorkerPool {
    pub fn new(listener: Listener, cfg: &Config) -> Self {
        Self {
            listener: Arc::new(listener),
            files: Arc::new(StaticFiles::new(&cfg.document_root)),
            workers: cfg.thread_limit.max(1),
        }
    }

    /// Starts every worker and waits on them. Workers never return on their
    /// own, so neither does this under normal operation.
    pub async fn run(self) -> anyhow::Result<()> {
        let mut set = JoinSet::new();

        for id in 0..self.workers {
            let listener = Arc::clone(&self.listener);
            let files = Arc::clone(&self.files);
            set.spawn(worker_loop(id, listener, files));
        }
        info!(workers = self.workers, "Worker pool started");

        while let Some(res) = set.join_next().await {
            if let Err(e) = res {
                error!("Worker exited unexpectedly: {}", e);
            }
        }

        Ok(())
    }
}

async fn worker_loop(id: usize, listener: Arc<Listener>, files: Arc<StaticFiles>) {
    loop {
        let (socket, peer) = match listener.accept_connection().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!(worker = id, error = %e, "Accept failed");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        debug!(worker = id, %peer, "Accepted connection");

        // A separate task so a panic inside one connection surfaces here as
        // a JoinError instead of ending the worker.
        let files = Arc::clone(&files);
        let handle = tokio::spawn(async move {
            let mut conn = Connection::new(socket, peer, files);
            conn.run().await
        });

        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => warn!(worker = id, %peer, "Connection error: {}", e),
            Err(e) => error!(worker = id, %peer, "Connection task failed: {}", e),
        }
    }
}
