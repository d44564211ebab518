//! File watching for live reload.
//!
//! Uses notify crate for cross-platform file system events.
use std::collections::{BTreeSet, HashMap};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

#[derive(Debug)]
struct Target {
    /// The path as the caller named it.
    path: PathBuf,
    canonical: PathBuf,
    dir: PathBuf,
    name: Option<OsString>,
}

/// Watches a set of files and reports debounced changes per file.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
    rx: Receiver<notify::Result<Event>>,
    targets: Vec<Target>,
    debounce: Duration,
    pending: HashMap<usize, Instant>,
}

impl std::fmt::Debug for FileWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWatcher")
            .field("targets", &self.targets)
            .field("debounce", &self.debounce)
            .finish_non_exhaustive()
    }
}

impl FileWatcher {
    /// Create a watcher for `paths`.
    ///
    /// Each distinct parent directory is watched once, non-recursively, so
    /// editors that save by rename are still seen.
    ///
    /// # Errors
    /// Returns an error if the file watcher cannot be created or a directory
    /// cannot be watched.
    pub fn new<P: AsRef<Path>>(paths: &[P], debounce: Duration) -> notify::Result<Self> {
        // Canonicalize so event paths from the OS (which are always absolute
        // and canonical) match our stored paths.
        let targets: Vec<Target> = paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
                Target {
                    path: path.to_path_buf(),
                    dir: watch_root_for(&canonical),
                    name: canonical.file_name().map(std::ffi::OsStr::to_os_string),
                    canonical,
                }
            })
            .collect();

        let (tx, rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = tx.send(res);
        })?;
        let roots: BTreeSet<&PathBuf> = targets.iter().map(|t| &t.dir).collect();
        for root in roots {
            watcher.watch(root, RecursiveMode::NonRecursive)?;
        }

        Ok(Self {
            _watcher: watcher,
            rx,
            targets,
            debounce,
            pending: HashMap::new(),
        })
    }

    /// Paths whose debounced change is ready, as they were passed to
    /// [`FileWatcher::new`].
    pub fn take_changed(&mut self) -> Vec<PathBuf> {
        let now = Instant::now();
        while let Ok(event) = self.rx.try_recv() {
            match event {
                Ok(ev) => {
                    for idx in self.relevant_targets(&ev) {
                        self.pending.insert(idx, now);
                    }
                }
                Err(err) => tracing::warn!(%err, "file watcher error"),
            }
        }

        let debounce = self.debounce;
        let ready: Vec<usize> = self
            .pending
            .iter()
            .filter(|(_, since)| since.elapsed() >= debounce)
            .map(|(idx, _)| *idx)
            .collect();
        let mut changed: Vec<PathBuf> = ready
            .into_iter()
            .filter_map(|idx| {
                self.pending.remove(&idx);
                self.targets.get(idx).map(|t| t.path.clone())
            })
            .collect();
        changed.sort();
        changed
    }

    fn relevant_targets(&self, event: &Event) -> Vec<usize> {
        self.targets
            .iter()
            .enumerate()
            .filter(|(_, target)| {
                event.paths.iter().any(|path| {
                    path == &target.dir
                        || path == &target.canonical
                        || (path.parent() == Some(target.dir.as_path())
                            && target
                                .name
                                .as_ref()
                                .is_some_and(|name| path.file_name() == Some(name.as_os_str())))
                })
            })
            .map(|(idx, _)| idx)
            .collect()
    }
}

fn watch_root_for(path: &Path) -> PathBuf {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
