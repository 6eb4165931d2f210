//! Artifact file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

/// Watches a facet directory and reports writes to one artifact file so a
/// running server can re-load it into the cache.
pub struct ArtifactWatcher {
    facet_dir: PathBuf,
    file_name: String,
    reload_tx: mpsc::UnboundedSender<()>,
}

impl ArtifactWatcher {
    /// Create a new watcher for `file_name` inside `facet_dir`.
    ///
    /// Returns the watcher and a receiver that yields one event per
    /// detected change.
    pub fn new(facet_dir: &Path, file_name: &str) -> (Self, mpsc::UnboundedReceiver<()>) {
        let (reload_tx, reload_rx) = mpsc::unbounded_channel();

        (
            Self {
                facet_dir: facet_dir.to_path_buf(),
                file_name: file_name.to_string(),
                reload_tx,
            },
            reload_rx,
        )
    }

    /// Start watching in a background thread. The returned watcher must be
    /// kept alive for events to keep flowing.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let tx = self.reload_tx.clone();
        let file_name = self.file_name.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    let touches_artifact = event
                        .paths
                        .iter()
                        .any(|p| p.file_name() == Some(std::ffi::OsStr::new(&file_name)));
                    if touches_artifact && (event.kind.is_modify() || event.kind.is_create()) {
                        tracing::info!("Artifact change detected, requesting reload");
                        let _ = tx.send(());
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.facet_dir, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.facet_dir, artifact = %self.file_name, "Artifact watcher started");
        Ok(watcher)
    }
}
