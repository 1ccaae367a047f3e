use std::sync::Arc;

use crate::{Bitmap, Color, Rect, Vec2};

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub clear_color: Color,
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug)]
pub enum SceneNode {
    /// Blit `image` with its top-left corner at `origin`.
    Image { image: Arc<Bitmap>, origin: Vec2 },
    PushClip { rect: Rect },
    PopClip,
}

impl Scene {
    pub fn new(clear_color: Color) -> Self {
        Self {
            clear_color,
            nodes: Vec::new(),
        }
    }

    pub fn draw_image(&mut self, image: Arc<Bitmap>, origin: Vec2) {
        self.nodes.push(SceneNode::Image { image, origin });
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.nodes.push(SceneNode::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        self.nodes.push(SceneNode::PopClip);
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }
}
