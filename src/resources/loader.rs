//! Bridge between the shell and the background loader thread.
//!
//! [`spawn_loader`] starts a thread that reads the whole manifest and sends
//! exactly one result back. The shell polls the bridge each frame (or blocks
//! on it) and installs the assets once they arrive.

use std::path::PathBuf;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, TryRecvError, bounded};

use crate::error::LoadError;
use crate::resources::assets::LoadedAssets;
use crate::resources::manifest::ResourceManifest;
use crate::systems::loader::load_manifest;

pub type LoadResult = Result<LoadedAssets, LoadError>;

pub struct LoadBridge {
    /// Receiver for the single load result (loader thread -> shell).
    pub rx: Receiver<LoadResult>,
    handle: Option<JoinHandle<()>>,
}

/// Start loading `manifest` relative to `root` on a background thread.
pub fn spawn_loader(manifest: ResourceManifest, root: impl Into<PathBuf>) -> LoadBridge {
    let root = root.into();
    let (tx, rx) = bounded::<LoadResult>(1);
    let handle = std::thread::spawn(move || {
        let result = load_manifest(&manifest, &root);
        // The shell may have been dropped already.
        let _ = tx.send(result);
    });
    LoadBridge {
        rx,
        handle: Some(handle),
    }
}

impl LoadBridge {
    /// Non-blocking check for the load result.
    pub fn poll(&mut self) -> Option<LoadResult> {
        match self.rx.try_recv() {
            Ok(result) => {
                self.join();
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.join();
                Some(Err(LoadError::Disconnected))
            }
        }
    }

    /// Block until the loader thread delivers its result.
    pub fn wait(&mut self) -> LoadResult {
        let result = self.rx.recv().unwrap_or(Err(LoadError::Disconnected));
        self.join();
        result
    }

    fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("Loader thread panicked");
            }
        }
    }
}
