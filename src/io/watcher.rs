use std::path::{Path, PathBuf};
use std::sync::mpsc;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

/// Events sent from the file watcher to the TUI event loop
#[derive(Debug)]
pub enum FileEvent {
    /// The task pack changed on disk
    PackChanged,
}

/// Watches the task pack file so edits show up without restarting.
pub struct PackWatcher {
    _watcher: RecommendedWatcher,
    rx: mpsc::Receiver<FileEvent>,
}

impl PackWatcher {
    /// Start watching the directory containing `pack_path`.
    /// Returns a `PackWatcher` whose `poll()` should be called each tick.
    pub fn start(pack_path: &Path) -> Result<Self, notify::Error> {
        let (tx, rx) = mpsc::channel();
        let watched: PathBuf = pack_path.to_path_buf();
        let dir = pack_path
            .parent()
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| {
                let event = match result {
                    Ok(e) => e,
                    Err(_) => return,
                };
                match event.kind {
                    EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_) => {}
                    _ => return,
                }
                if event.paths.iter().any(|p| p == &watched) {
                    let _ = tx.send(FileEvent::PackChanged);
                }
            },
            Config::default(),
        )?;

        watcher.watch(&dir, RecursiveMode::NonRecursive)?;
        Ok(PackWatcher {
            _watcher: watcher,
            rx,
        })
    }

    /// Non-blocking poll for pending file events
    pub fn poll(&self) -> Vec<FileEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.rx.try_recv() {
            events.push(evt);
        }
        events
    }
}
