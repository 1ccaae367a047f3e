//! CPU compositor for twinseek scenes.
//!
//! Replays a `Scene` into an RGBA framebuffer: images are blitted with
//! source-over blending at integer-snapped origins, clips nest by
//! intersection.

use std::path::Path;

use anyhow::Context;
use image::{Rgba, RgbaImage};
use smallvec::SmallVec;
use twinseek_core::{Bitmap, Color, Rect, RenderBackend, Scene, SceneNode, Vec2};

pub struct SoftwareBackend {
    fb: RgbaImage,
    frames: u64,
}

/// Half-open pixel span `[x0, x1) x [y0, y1)`, already clamped to the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelBounds {
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
}

impl PixelBounds {
    fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }
}

fn to_pixel_bounds(r: &Rect, fb_w: u32, fb_h: u32) -> PixelBounds {
    if r.is_empty() {
        return PixelBounds {
            x0: 0,
            y0: 0,
            x1: 0,
            y1: 0,
        };
    }
    let clamp = |v: f32, hi: u32| -> u32 { (v.round().max(0.0) as u32).min(hi) };
    PixelBounds {
        x0: clamp(r.x, fb_w),
        y0: clamp(r.y, fb_h),
        x1: clamp(r.right(), fb_w),
        y1: clamp(r.bottom(), fb_h),
    }
}

impl SoftwareBackend {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            fb: RgbaImage::new(width, height),
            frames: 0,
        }
    }

    pub fn frame_buffer(&self) -> &RgbaImage {
        &self.fb
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.fb
            .get_pixel_checked(x, y)
            .map(|p| Color(p[0], p[1], p[2], p[3]))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        self.fb
            .save_with_format(path, image::ImageFormat::Png)
            .with_context(|| format!("writing frame to {}", path.display()))
    }

    fn blit(&mut self, bitmap: &Bitmap, origin: Vec2, clip: PixelBounds) {
        let ox = origin.x.round() as i64;
        let oy = origin.y.round() as i64;

        let x0 = (clip.x0 as i64).max(ox);
        let y0 = (clip.y0 as i64).max(oy);
        let x1 = (clip.x1 as i64).min(ox + bitmap.width() as i64);
        let y1 = (clip.y1 as i64).min(oy + bitmap.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let Some(src) = bitmap.pixel((x - ox) as u32, (y - oy) as u32) else {
                    continue;
                };
                let dst = self.fb.get_pixel_mut(x as u32, y as u32);
                let out = src.over(Color(dst[0], dst[1], dst[2], dst[3]));
                *dst = Rgba(out.to_rgba());
            }
        }
    }
}

impl RenderBackend for SoftwareBackend {
    fn configure_surface(&mut self, width: u32, height: u32) {
        if width == self.fb.width() && height == self.fb.height() {
            return;
        }
        log::debug!("configure_surface {width}x{height}");
        self.fb = RgbaImage::new(width, height);
    }

    fn frame(&mut self, scene: &Scene) {
        let (fb_w, fb_h) = self.fb.dimensions();
        let clear = Rgba(scene.clear_color.to_rgba());
        for p in self.fb.pixels_mut() {
            *p = clear;
        }

        let root_clip = Rect {
            x: 0.0,
            y: 0.0,
            w: fb_w as f32,
            h: fb_h as f32,
        };
        let mut clip_stack: SmallVec<[Rect; 8]> = SmallVec::new();

        for node in &scene.nodes {
            match node {
                SceneNode::Image { image, origin } => {
                    let top = clip_stack.last().copied().unwrap_or(root_clip);
                    let bounds = to_pixel_bounds(&top, fb_w, fb_h);
                    if bounds.is_empty() {
                        continue;
                    }
                    self.blit(image, *origin, bounds);
                }
                SceneNode::PushClip { rect } => {
                    let top = clip_stack.last().copied().unwrap_or(root_clip);
                    clip_stack.push(top.intersect(rect));
                }
                SceneNode::PopClip => {
                    if clip_stack.pop().is_none() {
                        log::warn!("PopClip with empty stack");
                    }
                }
            }
        }

        if !clip_stack.is_empty() {
            log::warn!("{} clip(s) left pushed at end of frame", clip_stack.len());
        }
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const RED: Color = Color(255, 0, 0, 255);
    const GREEN: Color = Color(0, 255, 0, 255);

    #[test]
    fn clears_to_scene_color() {
        let mut be = SoftwareBackend::new(4, 2);
        be.frame(&Scene::new(Color::BLACK));
        assert_eq!(be.pixel(3, 1), Some(Color::BLACK));
        assert_eq!(be.frames_rendered(), 1);
    }

    #[test]
    fn blit_snaps_origin_and_stays_in_bounds() {
        let mut be = SoftwareBackend::new(6, 4);
        let mut scene = Scene::new(Color::BLACK);
        scene.draw_image(
            Arc::new(Bitmap::solid(4, 4, RED)),
            Vec2 { x: 3.6, y: -1.0 },
        );
        be.frame(&scene);

        assert_eq!(be.pixel(3, 0), Some(Color::BLACK));
        assert_eq!(be.pixel(4, 0), Some(RED));
        assert_eq!(be.pixel(5, 2), Some(RED));
        assert_eq!(be.pixel(5, 3), Some(Color::BLACK));
    }

    #[test]
    fn clip_limits_drawing_and_pop_restores() {
        let mut be = SoftwareBackend::new(8, 2);
        let mut scene = Scene::new(Color::BLACK);
        scene.push_clip(Rect::from_ltrb(2.0, 0.0, 5.0, 2.0));
        scene.draw_image(Arc::new(Bitmap::solid(8, 2, RED)), Vec2::default());
        scene.pop_clip();
        scene.draw_image(Arc::new(Bitmap::solid(1, 2, GREEN)), Vec2 { x: 7.0, y: 0.0 });
        be.frame(&scene);

        assert_eq!(be.pixel(1, 0), Some(Color::BLACK));
        assert_eq!(be.pixel(2, 0), Some(RED));
        assert_eq!(be.pixel(4, 1), Some(RED));
        assert_eq!(be.pixel(5, 0), Some(Color::BLACK));
        assert_eq!(be.pixel(7, 0), Some(GREEN));
    }

    #[test]
    fn nested_clips_intersect() {
        let mut be = SoftwareBackend::new(10, 1);
        let mut scene = Scene::new(Color::BLACK);
        scene.push_clip(Rect::from_ltrb(0.0, 0.0, 6.0, 1.0));
        scene.push_clip(Rect::from_ltrb(4.0, 0.0, 10.0, 1.0));
        scene.draw_image(Arc::new(Bitmap::solid(10, 1, RED)), Vec2::default());
        scene.pop_clip();
        scene.pop_clip();
        be.frame(&scene);

        assert_eq!(be.pixel(3, 0), Some(Color::BLACK));
        assert_eq!(be.pixel(4, 0), Some(RED));
        assert_eq!(be.pixel(5, 0), Some(RED));
        assert_eq!(be.pixel(6, 0), Some(Color::BLACK));
    }

    #[test]
    fn inverted_clip_draws_nothing() {
        let mut be = SoftwareBackend::new(10, 1);
        let mut scene = Scene::new(Color::BLACK);
        scene.push_clip(Rect::from_ltrb(7.0, 0.0, 3.0, 1.0));
        scene.draw_image(Arc::new(Bitmap::solid(10, 1, RED)), Vec2::default());
        scene.pop_clip();
        be.frame(&scene);

        assert!(be.frame_buffer().pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut be = SoftwareBackend::new(2, 1);
        let mut scene = Scene::new(Color::BLACK);
        scene.pop_clip();
        scene.draw_image(Arc::new(Bitmap::solid(2, 1, GREEN)), Vec2::default());
        be.frame(&scene);
        assert_eq!(be.pixel(1, 0), Some(GREEN));
    }

    #[test]
    fn translucent_pixels_blend_over() {
        let mut be = SoftwareBackend::new(1, 1);
        let mut scene = Scene::new(Color::BLACK);
        scene.draw_image(
            Arc::new(Bitmap::solid(1, 1, Color::TRANSPARENT)),
            Vec2::default(),
        );
        be.frame(&scene);
        assert_eq!(be.pixel(0, 0), Some(Color::BLACK));
    }

    #[test]
    fn configure_surface_resizes() {
        let mut be = SoftwareBackend::new(1, 1);
        be.configure_surface(5, 3);
        assert_eq!(be.frame_buffer().dimensions(), (5, 3));
    }
}
