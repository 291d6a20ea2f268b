use crate::state::WINDOW_SIZE;
use crate::vertex::Vertex;
use std::f64::consts::PI;

/// An opaque 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0, 0, 0);
    pub const WHITE: Color = Color::rgb8(255, 255, 255);

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    pub fn as_rgba8(&self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, 255)
    }
}

/// Drawing capabilities the wormhole needs from a 2D raster surface.
///
/// Coordinates and stroke widths are in logical window units.
pub trait Surface {
    /// Paints the whole surface with one color
    fn fill(&mut self, color: Color);
    /// Strokes an unfilled circle outline
    fn stroke_circle(&mut self, center: Vertex, radius: f64, color: Color, width: f64);
    /// Strokes an unfilled polygon outline, closing back to the first point
    fn stroke_polygon(&mut self, points: &[Vertex], color: Color, width: f64);
}

/// Maps the logical square window onto a device pixel grid.
///
/// The square is scaled uniformly to the largest size that fits and is
/// centered on the longer axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub device_width: usize,
    pub device_height: usize,
    pub scale: f64,
    pub origin: Vertex,
}

impl Viewport {
    pub fn new(device_width: usize, device_height: usize) -> Self {
        let side = device_width.min(device_height) as f64;
        Viewport {
            device_width,
            device_height,
            scale: side / WINDOW_SIZE as f64,
            origin: Vertex::new(
                (device_width as f64 - side) / 2.0,
                (device_height as f64 - side) / 2.0,
            ),
        }
    }

    /// Logical window coordinates to device pixels
    pub fn to_device(&self, logical: Vertex) -> Vertex {
        Vertex::new(
            self.origin.x + logical.x * self.scale,
            self.origin.y + logical.y * self.scale,
        )
    }

    /// Device pixels to logical window coordinates, clamped to the window
    pub fn to_logical(&self, device: Vertex) -> (i32, i32) {
        if self.scale <= 0.0 {
            return (WINDOW_SIZE / 2, WINDOW_SIZE / 2);
        }
        let clamp = |v: f64| (v.floor() as i32).clamp(0, WINDOW_SIZE - 1);
        (
            clamp((device.x - self.origin.x) / self.scale),
            clamp((device.y - self.origin.y) / self.scale),
        )
    }

    /// Stroke width in whole device pixels, never below one
    pub fn stroke_pixels(&self, width: f64) -> usize {
        (width * self.scale).round().max(1.0) as usize
    }
}

/// Software RGBA pixel buffer implementing [`Surface`]
pub struct RasterCanvas {
    width: usize,
    height: usize,
    pixel_data: Vec<u8>,
    viewport: Viewport,
}

impl RasterCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        RasterCanvas {
            width,
            height,
            pixel_data: vec![0u8; width * height * 4],
            viewport: Viewport::new(width, height),
        }
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Color of a device pixel, or `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y * self.width + x) * 4;
        Some(Color::rgb8(
            self.pixel_data[offset],
            self.pixel_data[offset + 1],
            self.pixel_data[offset + 2],
        ))
    }

    fn put_pixel(&mut self, x: isize, y: isize, color: Color) {
        if x < 0 || y < 0 || x >= self.width as isize || y >= self.height as isize {
            return;
        }
        let offset = (y as usize * self.width + x as usize) * 4;
        let (r, g, b, a) = color.as_rgba8();
        self.pixel_data[offset] = r;
        self.pixel_data[offset + 1] = g;
        self.pixel_data[offset + 2] = b;
        self.pixel_data[offset + 3] = a;
    }

    /// Stamps a square brush of `thickness` pixels centered on a device pixel
    fn stamp(&mut self, x: isize, y: isize, thickness: usize, color: Color) {
        let lo = -((thickness as isize - 1) / 2);
        let hi = lo + thickness as isize;
        for dy in lo..hi {
            for dx in lo..hi {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Draws a line between two device points using Bresenham's algorithm
    fn draw_line(&mut self, from: Vertex, to: Vertex, thickness: usize, color: Color) {
        let (mut x0, mut y0, x1, y1) = (
            from.x.round() as isize,
            from.y.round() as isize,
            to.x.round() as isize,
            to.y.round() as isize,
        );
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x0, y0, thickness, color);

            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Strokes a closed loop of device points
    fn draw_closed_path(&mut self, points: &[Vertex], thickness: usize, color: Color) {
        for (i, &start) in points.iter().enumerate() {
            let end = points[(i + 1) % points.len()];
            self.draw_line(start, end, thickness, color);
        }
    }
}

impl Surface for RasterCanvas {
    fn fill(&mut self, color: Color) {
        let (r, g, b, a) = color.as_rgba8();
        for pixel in self.pixel_data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[r, g, b, a]);
        }
    }

    fn stroke_circle(&mut self, center: Vertex, radius: f64, color: Color, width: f64) {
        let center = self.viewport.to_device(center);
        let radius = radius * self.viewport.scale;
        if radius <= 0.0 {
            return;
        }
        // Roughly one segment per two device pixels of circumference
        let segments = ((2.0 * PI * radius / 2.0).ceil() as usize).clamp(12, 720);
        let points: Vec<Vertex> = (0..segments)
            .map(|i| {
                let angle = 2.0 * PI * i as f64 / segments as f64;
                Vertex::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();
        let thickness = self.viewport.stroke_pixels(width);
        self.draw_closed_path(&points, thickness, color);
    }

    fn stroke_polygon(&mut self, points: &[Vertex], color: Color, width: f64) {
        if points.len() < 2 {
            return;
        }
        let device: Vec<Vertex> = points
            .iter()
            .map(|&p| self.viewport.to_device(p))
            .collect();
        let thickness = self.viewport.stroke_pixels(width);
        self.draw_closed_path(&device, thickness, color);
    }
}
