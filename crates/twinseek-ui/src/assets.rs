use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use twinseek_core::Bitmap;

use crate::{AssetNames, SeekBarError};

/// Host-side resource resolution. Returns the encoded bytes for `name`.
pub trait AssetSource {
    fn open(&self, name: &str) -> std::io::Result<Vec<u8>>;
}

/// Resolves names relative to a directory on disk.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetSource for DirSource {
    fn open(&self, name: &str) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.root.join(name))
    }
}

/// In-memory resources, e.g. bytes from `include_bytes!`.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    entries: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(name.into(), bytes.into());
    }

    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetSource for MemorySource {
    fn open(&self, name: &str) -> std::io::Result<Vec<u8>> {
        self.entries.get(name).cloned().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, format!("no asset `{name}`"))
        })
    }
}

/// The four bitmaps a seek bar draws.
#[derive(Clone, Debug)]
pub struct SeekBarAssets {
    pub background: Arc<Bitmap>,
    pub progress: Arc<Bitmap>,
    pub left_thumb: Arc<Bitmap>,
    pub right_thumb: Arc<Bitmap>,
}

impl SeekBarAssets {
    pub fn new(background: Bitmap, progress: Bitmap, left_thumb: Bitmap, right_thumb: Bitmap) -> Self {
        Self {
            background: Arc::new(background),
            progress: Arc::new(progress),
            left_thumb: Arc::new(left_thumb),
            right_thumb: Arc::new(right_thumb),
        }
    }

    /// Decodes all four images. Names that repeat are decoded once and shared.
    pub fn load(source: &dyn AssetSource, names: &AssetNames) -> Result<Self, SeekBarError> {
        let mut cache: HashMap<String, Arc<Bitmap>> = HashMap::new();
        let mut get = |name: &str| -> Result<Arc<Bitmap>, SeekBarError> {
            if let Some(b) = cache.get(name) {
                return Ok(b.clone());
            }
            let b = Arc::new(decode(source, name)?);
            cache.insert(name.to_string(), b.clone());
            Ok(b)
        };

        let assets = Self {
            background: get(&names.background)?,
            progress: get(&names.progress)?,
            left_thumb: get(&names.left_thumb)?,
            right_thumb: get(&names.right_thumb)?,
        };
        log::debug!(
            "seek bar assets loaded: background {}x{}, progress {}x{}, thumbs {}x{} / {}x{}",
            assets.background.width(),
            assets.background.height(),
            assets.progress.width(),
            assets.progress.height(),
            assets.left_thumb.width(),
            assets.left_thumb.height(),
            assets.right_thumb.width(),
            assets.right_thumb.height(),
        );
        Ok(assets)
    }
}

pub fn decode(source: &dyn AssetSource, name: &str) -> Result<Bitmap, SeekBarError> {
    let bytes = source.open(name).map_err(|e| SeekBarError::MissingAsset {
        name: name.to_string(),
        source: e,
    })?;
    let rgba = image::load_from_memory(&bytes)
        .map_err(|e| SeekBarError::DecodeAsset {
            name: name.to_string(),
            source: e,
        })?
        .to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(Bitmap::from_rgba(w, h, rgba.into_raw())?)
}
