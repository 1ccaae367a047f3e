//! # Bitmaps, Scenes, and Invalidation
//!
//! Twinseek widgets do not own a GPU surface. They describe each frame as a
//! flat list of draw operations and let a backend composite it:
//!
//! - `Bitmap` — an immutable, decoded RGBA image.
//! - `Scene` — the per-frame draw list (`Image`, `PushClip`, `PopClip`).
//! - `Invalidator` — a thread-safe "please redraw" flag set the host drains
//!   once per frame.
//!
//! ## Building a scene
//!
//! ```rust
//! use std::sync::Arc;
//! use twinseek_core::*;
//!
//! let thumb = Arc::new(Bitmap::solid(8, 8, Color::WHITE));
//!
//! let mut scene = Scene::default();
//! scene.push_clip(Rect::from_ltrb(0.0, 0.0, 4.0, 8.0));
//! scene.draw_image(thumb, Vec2 { x: 0.0, y: 0.0 });
//! scene.pop_clip();
//!
//! assert_eq!(scene.nodes.len(), 3);
//! ```
//!
//! ## Requesting redraws
//!
//! Widgets call `invalidate()` from the input path and `post_invalidate()`
//! from anywhere else. Hosts poll:
//!
//! ```rust
//! use twinseek_core::*;
//!
//! let inv = Invalidator::new();
//! inv.post_invalidate();
//!
//! let pending = inv.take();
//! assert!(pending.contains(Invalidation::POSTED));
//! assert!(!inv.is_dirty());
//! ```
//!
//! ## Pointer input
//!
//! Input arrives as `PointerEvent`s in widget-local coordinates. A widget
//! answers with `EventResult::Consumed` or hands the event back with
//! `EventResult::Ignored` so the host can run its default handling.

pub mod bitmap;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod invalidate;
pub mod render_api;
pub mod scene;

pub use bitmap::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use invalidate::*;
pub use render_api::*;
pub use scene::*;
