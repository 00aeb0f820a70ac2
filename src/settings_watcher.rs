//! Settings file hot-reload.
//!
//! Watches the settings JSON for modification so threshold tuning does not
//! require a session restart. Events arrive on a channel; the session loop
//! polls between frames and re-loads settings when a change is seen.

use anyhow::{Context as _, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use tracing::{debug, warn};

pub use crate::settings::default_settings_path;

/// A change observed on the watched settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsEvent {
    /// File contents changed; settings should be re-loaded
    Modified,
    /// File was removed or renamed away
    Removed,
}

/// Watches one settings file for changes.
pub struct SettingsWatcher {
    // Held for its Drop; dropping the watcher stops the native watch.
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    path: PathBuf,
}

impl SettingsWatcher {
    /// Start watching the given settings file.
    pub fn new(path: PathBuf) -> Result<Self> {
        let (tx, rx) = channel();
        let mut watcher = notify::recommended_watcher(tx)
            .context("failed to create settings watcher")?;
        // Watch the parent directory: editors often replace the file on
        // save, which would drop a direct file watch.
        let watch_target = path.parent().map(PathBuf::from).unwrap_or_else(|| path.clone());
        watcher
            .watch(&watch_target, RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {}", watch_target.display()))?;
        Ok(Self {
            _watcher: watcher,
            rx,
            path,
        })
    }

    /// Drain pending file system events, returning the most relevant change
    /// to the watched file, if any. Non-blocking.
    pub fn poll(&mut self) -> Option<SettingsEvent> {
        let mut seen = None;
        loop {
            match self.rx.try_recv() {
                Ok(Ok(event)) => {
                    if !event.paths.iter().any(|p| p == &self.path) {
                        continue;
                    }
                    match event.kind {
                        EventKind::Create(_) | EventKind::Modify(_) => {
                            debug!(path = ?self.path, "settings file modified");
                            seen = Some(SettingsEvent::Modified);
                        }
                        EventKind::Remove(_) => {
                            seen = Some(SettingsEvent::Removed);
                        }
                        _ => {}
                    }
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "settings watcher error");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        seen
    }

    /// The file being watched.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}
