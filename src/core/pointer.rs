use glam::Vec2;

/// Latest pointer position in viewport (client) coordinates.
///
/// `None` until the first pointer-move event. Consumers must treat a missing
/// position as "no interaction" instead of computing distances against it.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    #[inline]
    pub fn set(&mut self, x: f32, y: f32) {
        self.pos = Some(Vec2::new(x, y));
    }

    #[inline]
    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }

    /// Pointer position relative to a surface whose top-left corner sits at
    /// `origin` on the page.
    #[inline]
    pub fn local_to(&self, origin: Vec2) -> Option<Vec2> {
        self.pos.map(|p| p - origin)
    }
}
