use glam::Vec2;

/// Minimal 2D drawing target used by the particle simulations.
///
/// The web front-end implements this over `CanvasRenderingContext2d`; tests
/// use an in-memory recorder. Colors are CSS color strings.
pub trait Surface {
    /// Clear the whole visible region of the surface.
    fn clear(&mut self);

    /// Fill a circle. Fails if the backend rejects the geometry
    /// (e.g. a negative radius on a canvas).
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) -> anyhow::Result<()>;

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32);
}

/// Collects per-entity draw failures for one frame. Every entity is still
/// drawn; the first error is reported once the frame is done.
#[derive(Debug, Default)]
pub struct DrawErrors {
    first: Option<anyhow::Error>,
    failed: usize,
}

impl DrawErrors {
    pub fn record(&mut self, result: anyhow::Result<()>) {
        if let Err(e) = result {
            self.failed += 1;
            self.first.get_or_insert(e);
        }
    }

    pub fn finish(self) -> anyhow::Result<()> {
        match self.first {
            None => Ok(()),
            Some(e) => Err(e.context(format!("{} draw call(s) failed", self.failed))),
        }
    }
}

/// Page color theme, read from the root element's `data-theme` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Icon shown on the toggle button while this theme is active.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Dark => "fas fa-sun",
            Theme::Light => "fas fa-moon",
        }
    }
}
