pub mod command_recorder;
pub mod playfield;
pub mod shader;
pub mod wgpu_renderer;
pub mod window;

use crate::traits::render::Color;

/// Convert Color to a [f32; 4] array suitable for uniform data.
pub fn color_to_array(c: Color) -> [f32; 4] {
    [c.r, c.g, c.b, c.a]
}

/// Convert Color to wgpu::Color.
pub fn color_to_wgpu(c: Color) -> wgpu::Color {
    wgpu::Color {
        r: f64::from(c.r),
        g: f64::from(c.g),
        b: f64::from(c.b),
        a: f64::from(c.a),
    }
}

/// Affine transform placing a pixel-space rectangle (top-left origin, Y down)
/// into normalized device coordinates (Y up), as a column-major mat3x3 with
/// std140 column padding. Applied to a unit square in the vertex shader.
pub fn rect_transform(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    screen_w: f32,
    screen_h: f32,
) -> [[f32; 4]; 3] {
    let sx = w / screen_w * 2.0;
    let sy = h / screen_h * 2.0;
    let tx = x / screen_w * 2.0 - 1.0;
    let ty = -(y / screen_h * 2.0) + 1.0 - sy;
    [
        [sx, 0.0, 0.0, 0.0],
        [0.0, sy, 0.0, 0.0],
        [tx, ty, 1.0, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(m: [[f32; 4]; 3], p: [f32; 2]) -> [f32; 2] {
        [
            p[0] * m[0][0] + p[1] * m[1][0] + m[2][0],
            p[0] * m[0][1] + p[1] * m[1][1] + m[2][1],
        ]
    }

    #[test]
    fn test_color_to_array() {
        let c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(color_to_array(c), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn full_screen_rect_covers_ndc() {
        let m = rect_transform(0.0, 0.0, 800.0, 600.0, 800.0, 600.0);
        // Unit-square corners land on the NDC extremes.
        assert_eq!(apply(m, [0.0, 0.0]), [-1.0, -1.0]);
        assert_eq!(apply(m, [1.0, 1.0]), [1.0, 1.0]);
    }

    #[test]
    fn top_left_quadrant_rect_maps_with_y_flip() {
        let m = rect_transform(0.0, 0.0, 400.0, 300.0, 800.0, 600.0);
        // Pixel top-left quadrant occupies NDC x in [-1, 0], y in [0, 1].
        let lo = apply(m, [0.0, 0.0]);
        let hi = apply(m, [1.0, 1.0]);
        assert_eq!(lo, [-1.0, 0.0]);
        assert_eq!(hi, [0.0, 1.0]);
    }

    #[test]
    fn bottom_right_pixel_corner_maps_to_ndc_bottom_right() {
        let m = rect_transform(790.0, 590.0, 10.0, 10.0, 800.0, 600.0);
        let corner = apply(m, [1.0, 0.0]);
        assert!((corner[0] - 1.0).abs() < 1e-6);
        assert!((corner[1] - (-1.0)).abs() < 1e-6);
    }
}
