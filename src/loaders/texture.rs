//! Texture and environment map loading.
//!
//! Decoding runs on a small shared worker pool. The result comes back through
//! a oneshot channel wrapped in [`PendingLoad`], which can be awaited or polled
//! once per frame without blocking.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::OnceLock;
use std::task::{Context, Poll};

use futures::channel::oneshot;
use futures::executor::ThreadPool;
use futures::FutureExt;

use crate::error::LoadError;
use crate::material::TextureKey;
use crate::traits::renderer::SceneRenderer;

/// Decoded RGBA8 image
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>, // RGBA8, rows top to bottom
}

impl TextureImage {
    /// Decode an image file. HDR sources are clamped to 8 bits per channel.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| LoadError::Image {
            path: path.to_path_buf(),
            source,
        })?;

        let rgba = decoded.to_rgba8();
        Ok(Self {
            width: rgba.width(),
            height: rgba.height(),
            pixels: rgba.into_raw(),
        })
    }

    /// 1x1 image of a single color
    pub fn solid_color(rgba: [u8; 4]) -> Self {
        Self {
            width: 1,
            height: 1,
            pixels: rgba.to_vec(),
        }
    }

    pub fn bytes_per_row(&self) -> u32 {
        4 * self.width
    }
}

/// Load in flight; resolves to the decoded image or the reason it failed
#[derive(Debug)]
pub struct PendingLoad {
    path: PathBuf,
    receiver: oneshot::Receiver<Result<TextureImage, LoadError>>,
}

impl PendingLoad {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check. Returns `Some` exactly once, when the load settles.
    pub fn try_take(&mut self) -> Option<Result<TextureImage, LoadError>> {
        match self.receiver.try_recv() {
            Ok(Some(result)) => Some(result),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(LoadError::Cancelled(self.path.clone()))),
        }
    }
}

impl Future for PendingLoad {
    type Output = Result<TextureImage, LoadError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.receiver.poll_unpin(cx) {
            Poll::Ready(Ok(result)) => Poll::Ready(result),
            Poll::Ready(Err(oneshot::Canceled)) => {
                Poll::Ready(Err(LoadError::Cancelled(self.path.clone())))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

/// Decoder threads shared by every load
pub const LOADER_THREADS: usize = 4;

fn worker_pool() -> Option<&'static ThreadPool> {
    static POOL: OnceLock<Option<ThreadPool>> = OnceLock::new();
    POOL.get_or_init(|| {
        ThreadPool::builder()
            .pool_size(LOADER_THREADS)
            .name_prefix("texture-loader-")
            .create()
            .map_err(|e| log::warn!("Could not start texture loader threads: {}", e))
            .ok()
    })
    .as_ref()
}

pub struct TextureLoader;

impl TextureLoader {
    /// Queue `path` for decoding in the background
    pub fn load(path: impl Into<PathBuf>) -> PendingLoad {
        let path = path.into();
        let (sender, receiver) = oneshot::channel();

        // Without a pool the sender is dropped here, which surfaces as Cancelled.
        if let Some(pool) = worker_pool() {
            let worker_path = path.clone();
            pool.spawn_ok(async move {
                let result = TextureImage::from_file(&worker_path);
                // The receiver may already be gone if the sketch shut down.
                let _ = sender.send(result);
            });
        }

        log::debug!("Loading texture {:?}", path);
        PendingLoad { path, receiver }
    }
}

/// Outcome of one settled load
#[derive(Debug)]
pub struct LoadReport {
    pub key: TextureKey,
    pub result: Result<(u32, u32), LoadError>,
}

/// Every texture a scene refers to, loading in the background
#[derive(Debug, Default)]
pub struct AssetRequests {
    pending: Vec<(TextureKey, PendingLoad)>,
    loaded: usize,
    failed: usize,
}

impl AssetRequests {
    pub fn start(keys: impl IntoIterator<Item = TextureKey>) -> Self {
        let pending: Vec<_> = keys
            .into_iter()
            .map(|key| {
                let load = TextureLoader::load(key.path());
                (key, load)
            })
            .collect();

        if !pending.is_empty() {
            log::info!("Loading {} texture(s)", pending.len());
        }

        Self {
            pending,
            loaded: 0,
            failed: 0,
        }
    }

    /// Upload every load that settled since the last call
    pub fn poll<R>(&mut self, renderer: &mut R) -> Vec<LoadReport>
    where
        R: SceneRenderer + ?Sized,
    {
        let mut reports = Vec::new();
        let mut still_pending = Vec::with_capacity(self.pending.len());

        for (key, mut load) in self.pending.drain(..) {
            match load.try_take() {
                Some(result) => reports.push(Self::settle(key, result, renderer, &mut self.loaded, &mut self.failed)),
                None => still_pending.push((key, load)),
            }
        }

        self.pending = still_pending;
        reports
    }

    /// Block until every outstanding load settles
    pub fn finish<R>(&mut self, renderer: &mut R) -> Vec<LoadReport>
    where
        R: SceneRenderer + ?Sized,
    {
        self.pending
            .drain(..)
            .collect::<Vec<_>>()
            .into_iter()
            .map(|(key, load)| {
                let result = futures::executor::block_on(load);
                Self::settle(key, result, renderer, &mut self.loaded, &mut self.failed)
            })
            .collect()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    fn settle<R>(
        key: TextureKey,
        result: Result<TextureImage, LoadError>,
        renderer: &mut R,
        loaded: &mut usize,
        failed: &mut usize,
    ) -> LoadReport
    where
        R: SceneRenderer + ?Sized,
    {
        let result = match result {
            Ok(image) => {
                log::debug!("Loaded {} ({}x{})", key, image.width, image.height);
                renderer.upload_texture(&key, &image);
                *loaded += 1;
                Ok((image.width, image.height))
            }
            Err(e) => {
                log::warn!("{}; keeping fallback texture", e);
                *failed += 1;
                Err(e)
            }
        };

        LoadReport { key, result }
    }
}
