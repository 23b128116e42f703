use anyhow::Result;

/// Color with RGBA components (0.0..=1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same color with a different alpha, e.g. for the translucent target zones.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// Abstraction over rectangle rendering backends.
/// Implementations: WgpuRectRenderer (production), CommandRecorder (testing).
///
/// Rects are drawn in pixel coordinates with a top-left origin. Calls are not
/// thread-safe and must be issued in submission order within a single frame:
/// `begin_frame`, any number of `draw_rect`, `end_frame`.
pub trait RectBackend {
    fn begin_frame(&mut self) -> Result<()>;

    /// Enqueue one flat-colored rectangle. The backend draws enqueued rects
    /// in call order when the frame ends.
    fn draw_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) -> Result<()>;

    /// Flush all enqueued rects and present the frame.
    fn end_frame(&mut self) -> Result<()>;

    fn screen_size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32);
}
