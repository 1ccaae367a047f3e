use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitmapError {
    #[error("rgba buffer for {width}x{height} bitmap must be {expected} bytes, got {actual}")]
    BufferSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
