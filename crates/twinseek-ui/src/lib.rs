//! A dual-thumb range seek bar composited from four bitmaps.
//!
//! ```rust,no_run
//! use twinseek_core::*;
//! use twinseek_ui::*;
//!
//! # fn main() -> Result<(), SeekBarError> {
//! let mut bar = RangeSeekBar::from_source(&DirSource::new("res"), &SeekBarStyle::default())?
//!     .on_progress_change(|lo, hi| log::info!("range {lo}..{hi}"));
//!
//! let _ = bar.handle_pointer(&PointerEvent::touch_down(40.0, 10.0));
//!
//! let mut scene = Scene::default();
//! if bar.invalidator().take() != Invalidation::empty() {
//!     bar.paint(&mut scene);
//! }
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod error;
pub mod handle;
pub mod seekbar;
pub mod style;

pub use assets::{AssetSource, DirSource, MemorySource, SeekBarAssets};
pub use error::SeekBarError;
pub use handle::SeekBarHandle;
pub use seekbar::{Callback, ProgressCallback, RangeSeekBar};
pub use style::{AssetNames, SeekBarStyle};

/// Routes `log` output to logcat.
#[cfg(feature = "android")]
pub fn init_android_logging(level: log::LevelFilter) {
    android_logger::init_once(android_logger::Config::default().with_max_level(level));
}
