use thiserror::Error;
use twinseek_core::BitmapError;

#[derive(Debug, Error)]
pub enum SeekBarError {
    #[error("asset `{name}` could not be opened")]
    MissingAsset {
        name: String,
        #[source]
        source: std::io::Error,
    },
    #[error("asset `{name}` is not a decodable image")]
    DecodeAsset {
        name: String,
        #[source]
        source: image::ImageError,
    },
    #[error(transparent)]
    Bitmap(#[from] BitmapError),
    #[error("invalid seek bar style")]
    Style(#[from] serde_json::Error),
}
