//! Threaded file loader reporting progress over a channel.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, info, warn};

use crate::error::AssetError;
use crate::model::ModelAsset;

/// Bytes read between progress reports.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Bytes loaded so far out of the file size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl LoadProgress {
    /// Percentage loaded, or `None` when the total size is unknown.
    pub fn percent(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.loaded as f64 / self.total as f64 * 100.0)
        }
    }
}

/// Messages sent by a running load.
#[derive(Debug)]
pub enum LoadEvent {
    Progress(LoadProgress),
    /// Terminal: the model finished loading.
    Loaded(ModelAsset),
    /// Terminal: the load failed.
    Failed(AssetError),
}

/// Spawns model loads on background threads.
#[derive(Clone, Debug)]
pub struct ModelLoader {
    chunk_size: usize,
}

impl Default for ModelLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

impl ModelLoader {
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// Start loading `path` in the background.
    pub fn spawn(&self, path: impl AsRef<Path>) -> Result<LoadTask, AssetError> {
        spawn_load(
            path.as_ref().to_path_buf(),
            self.chunk_size,
            Arc::new(AtomicBool::new(false)),
        )
    }
}

/// Handle to a running load.
pub struct LoadTask {
    events: Receiver<LoadEvent>,
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl LoadTask {
    /// Ask the loader to stop. It reports [`AssetError::Cancelled`] at its next chunk boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Drain the events available right now without blocking.
    pub fn try_events(&self) -> Vec<LoadEvent> {
        self.events.try_iter().collect()
    }

    /// Block until the load finishes, forwarding progress updates to `on_progress`.
    pub fn wait(
        mut self,
        mut on_progress: impl FnMut(LoadProgress),
    ) -> Result<ModelAsset, AssetError> {
        let outcome = loop {
            match self.events.recv() {
                Ok(LoadEvent::Progress(progress)) => on_progress(progress),
                Ok(LoadEvent::Loaded(asset)) => break Ok(asset),
                Ok(LoadEvent::Failed(e)) => break Err(e),
                Err(_) => break Err(AssetError::Disconnected),
            }
        };
        if let Some(handle) = self.handle.take() {
            join_loader(handle);
        }
        outcome
    }
}

/// Join a finished loader thread. Returns `false` if it panicked.
fn join_loader(handle: JoinHandle<()>) -> bool {
    match handle.join() {
        Ok(()) => true,
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            warn!("Model loader thread panicked: {reason}");
            false
        }
    }
}

fn spawn_load(
    path: PathBuf,
    chunk_size: usize,
    cancelled: Arc<AtomicBool>,
) -> Result<LoadTask, AssetError> {
    let (sender, events) = unbounded();
    let flag = Arc::clone(&cancelled);
    let thread_path = path.clone();

    let handle = std::thread::Builder::new()
        .name("model-loader".into())
        .spawn(move || {
            let event = match read_model(&thread_path, chunk_size, &flag, &sender) {
                Ok(asset) => {
                    info!(
                        path = %asset.path.display(),
                        bytes = asset.bytes.len(),
                        format = ?asset.format,
                        "Model loaded"
                    );
                    LoadEvent::Loaded(asset)
                }
                Err(e) => LoadEvent::Failed(e),
            };
            // The receiver may already be gone; nobody is left to tell.
            let _ = sender.send(event);
        })
        .map_err(|source| AssetError::Io { path, source })?;

    Ok(LoadTask {
        events,
        cancelled,
        handle: Some(handle),
    })
}

fn read_model(
    path: &Path,
    chunk_size: usize,
    cancelled: &AtomicBool,
    progress: &Sender<LoadEvent>,
) -> Result<ModelAsset, AssetError> {
    let io_err = |source: std::io::Error| AssetError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AssetError::NotFound(path.to_path_buf()),
        _ => io_err(e),
    })?;
    let total = file.metadata().map_err(io_err)?.len();
    if total == 0 {
        return Err(AssetError::Empty(path.to_path_buf()));
    }
    debug!(path = %path.display(), total, "Loading model");

    let mut bytes = Vec::with_capacity(total as usize);
    let mut chunk = vec![0u8; chunk_size];
    loop {
        if cancelled.load(Ordering::Relaxed) {
            return Err(AssetError::Cancelled);
        }
        let n = match file.read(&mut chunk) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(io_err(e)),
        };
        bytes.extend_from_slice(&chunk[..n]);
        let _ = progress.send(LoadEvent::Progress(LoadProgress {
            loaded: bytes.len() as u64,
            total,
        }));
    }

    Ok(ModelAsset::new(path.to_path_buf(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelFormat;

    fn write_glb(dir: &Path, len: usize) -> PathBuf {
        let path = dir.join("scene.glb");
        let mut data = b"glTF".to_vec();
        data.resize(len, 7);
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_progress_percent() {
        let p = LoadProgress {
            loaded: 25,
            total: 200,
        };
        assert_eq!(p.percent(), Some(12.5));
        let unknown = LoadProgress {
            loaded: 10,
            total: 0,
        };
        assert_eq!(unknown.percent(), None);
    }

    #[test]
    fn test_load_reports_progress_then_asset() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_glb(dir.path(), 1000);

        let task = ModelLoader::new(256).spawn(&path).unwrap();
        let mut updates = Vec::new();
        let asset = task.wait(|p| updates.push(p)).unwrap();

        assert_eq!(asset.bytes.len(), 1000);
        assert_eq!(asset.format, ModelFormat::Glb);
        assert_eq!(asset.path, path);
        assert!(updates.len() >= 4);
        assert!(updates.windows(2).all(|w| w[0].loaded < w[1].loaded));
        assert_eq!(updates.last().unwrap().percent(), Some(100.0));
    }

    #[test]
    fn test_missing_file_fails_with_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let task = ModelLoader::default()
            .spawn(dir.path().join("missing.glb"))
            .unwrap();
        let err = task.wait(|_| {}).unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn test_empty_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.glb");
        std::fs::write(&path, b"").unwrap();
        let err = ModelLoader::default()
            .spawn(&path)
            .unwrap()
            .wait(|_| {})
            .unwrap_err();
        assert!(matches!(err, AssetError::Empty(_)), "got {err:?}");
    }

    #[test]
    fn test_cancelled_load_reports_cancelled() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_glb(dir.path(), 4096);

        let task = spawn_load(path, 16, Arc::new(AtomicBool::new(true))).unwrap();
        let mut updates = 0;
        let err = task.wait(|_| updates += 1).unwrap_err();
        assert!(matches!(err, AssetError::Cancelled), "got {err:?}");
        assert_eq!(updates, 0);
    }

    #[test]
    fn test_cancel_sets_flag_and_ends_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_glb(dir.path(), 1 << 16);

        let task = ModelLoader::new(1).spawn(&path).unwrap();
        task.cancel();
        assert!(task.cancelled.load(Ordering::Relaxed));
        // The loader may have finished before it saw the flag.
        match task.wait(|_| {}) {
            Ok(asset) => assert_eq!(asset.bytes.len(), 1 << 16),
            Err(e) => assert!(matches!(e, AssetError::Cancelled), "got {e:?}"),
        }
    }

    #[test]
    fn test_join_loader_reports_panic() {
        let clean = std::thread::spawn(|| {});
        assert!(join_loader(clean));

        let panicked = std::thread::spawn(|| panic!("corrupt chunk"));
        assert!(!join_loader(panicked));
    }

    #[test]
    fn test_try_events_eventually_sees_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_glb(dir.path(), 100);
        let task = ModelLoader::default().spawn(&path).unwrap();

        let mut finished = false;
        for _ in 0..500 {
            if task
                .try_events()
                .iter()
                .any(|e| matches!(e, LoadEvent::Loaded(_)))
            {
                finished = true;
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }
        assert!(finished, "load never completed");
    }
}
