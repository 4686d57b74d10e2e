use anyhow::{Context, Result};
use std::path::Path;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba(0, 0, 0, 0);
}

/// 2D drawing operations for canvas
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Fill entire canvas with color
    Clear(Rgba),

    /// Draw circle outline at (cx, cy) with radius
    Circle { cx: i32, cy: i32, radius: u32, color: Rgba },

    /// Draw filled circle at (cx, cy) with radius
    FilledCircle { cx: i32, cy: i32, radius: u32, color: Rgba },

    /// Draw line from (x1, y1) to (x2, y2)
    Line { x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba },
}

/// Canvas state - pixel buffer with draw operations
#[derive(Debug, Clone)]
pub struct Canvas {
    /// RGBA pixel buffer
    pixels: Vec<u8>,
    /// Pending draw operations
    operations: Vec<DrawOp>,
    width: u32,
    height: u32,
}

impl Canvas {
    /// Create new transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            operations: Vec::new(),
            width,
            height,
        }
    }

    /// Add draw operations in order - functional style
    pub fn draw_all(mut self, ops: impl IntoIterator<Item = DrawOp>) -> Self {
        self.operations.extend(ops);
        self
    }

    /// Execute all pending operations and return new canvas
    pub fn execute_ops(&self) -> Self {
        let mut canvas = Self {
            pixels: self.pixels.clone(),
            operations: Vec::new(),
            width: self.width,
            height: self.height,
        };

        for op in &self.operations {
            canvas.execute_op(op);
        }

        canvas
    }

    fn execute_op(&mut self, op: &DrawOp) {
        match *op {
            DrawOp::Clear(color) => self.clear(color),
            DrawOp::Circle {
                cx,
                cy,
                radius,
                color,
            } => self.draw_circle(cx, cy, radius, color),
            DrawOp::FilledCircle {
                cx,
                cy,
                radius,
                color,
            } => self.draw_filled_circle(cx, cy, radius, color),
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                color,
            } => self.draw_line(x1, y1, x2, y2, color),
        }
    }

    fn clear(&mut self, color: Rgba) {
        for i in 0..(self.width * self.height) as usize {
            self.write(i, color);
        }
    }

    fn write(&mut self, index: usize, color: Rgba) {
        let idx = index * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&[color.0, color.1, color.2, color.3]);
    }

    /// Set single pixel; off-canvas coordinates are ignored
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba) {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return;
        }
        let index = (y as u32 * self.width + x as u32) as usize;
        self.write(index, color);
    }

    /// Draw circle outline using midpoint circle algorithm
    fn draw_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgba) {
        let (mut x, mut y) = (radius as i32, 0i32);
        let mut p = 1 - radius as i32;

        while x >= y {
            let points = [
                (cx + x, cy + y), (cx - x, cy + y),
                (cx + x, cy - y), (cx - x, cy - y),
                (cx + y, cy + x), (cx - y, cy + x),
                (cx + y, cy - x), (cx - y, cy - x),
            ];
            for (px, py) in points {
                self.set_pixel(px, py, color);
            }

            y += 1;
            if p <= 0 {
                p += 2 * y + 1;
            } else {
                x -= 1;
                p += 2 * (y - x) + 1;
            }
        }
    }

    fn draw_filled_circle(&mut self, cx: i32, cy: i32, radius: u32, color: Rgba) {
        let r = radius as i32;
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Draw line using Bresenham's algorithm
    fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba) {
        let (mut x, mut y) = (x1, y1);

        let dx = (x2 - x).abs();
        let dy = -(y2 - y).abs();
        let sx = if x < x2 { 1 } else { -1 };
        let sy = if y < y2 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x, y, color);

            if x == x2 && y == y2 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Color at (x, y), if on the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        let p = &self.pixels[idx..idx + 4];
        Some(Rgba(p[0], p[1], p[2], p[3]))
    }

    /// Get canvas dimensions
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Write the executed pixels to a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let image = image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("Canvas buffer does not match its dimensions")?;
        image
            .save(path)
            .with_context(|| format!("Failed to write image: {:?}", path))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba(255, 0, 0, 255);

    #[test]
    fn canvas_creation() {
        let canvas = Canvas::new(100, 50);
        assert_eq!(canvas.dimensions(), (100, 50));
        assert_eq!(canvas.pixel(0, 0), Some(Rgba::TRANSPARENT));
        assert_eq!(canvas.pixel(99, 49), Some(Rgba::TRANSPARENT));
        assert_eq!(canvas.pixel(100, 0), None);
    }

    #[test]
    fn operations_wait_for_execute() {
        let canvas = Canvas::new(10, 10).draw_all([DrawOp::Clear(RED)]);
        assert_eq!(canvas.pixel(5, 5), Some(Rgba::TRANSPARENT));

        let executed = canvas.execute_ops();
        assert_eq!(executed.pixel(5, 5), Some(RED));
        // Executing again replays nothing
        assert_eq!(executed.execute_ops().pixel(0, 0), Some(RED));
    }

    #[test]
    fn off_canvas_drawing_is_clipped() {
        let canvas = Canvas::new(10, 10)
            .draw_all([
                DrawOp::FilledCircle {
                    cx: -2,
                    cy: -2,
                    radius: 4,
                    color: RED,
                },
                DrawOp::Line {
                    x1: -5,
                    y1: 5,
                    x2: 20,
                    y2: 5,
                    color: RED,
                },
            ])
            .execute_ops();

        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(9, 5), Some(RED));
        assert_eq!(canvas.pixel(9, 9), Some(Rgba::TRANSPARENT));
        assert_eq!(canvas.pixel(10, 5), None);
    }

    #[test]
    fn circle_outline_leaves_center_empty() {
        let canvas = Canvas::new(21, 21)
            .draw_all([DrawOp::Circle {
                cx: 10,
                cy: 10,
                radius: 8,
                color: RED,
            }])
            .execute_ops();

        assert_eq!(canvas.pixel(18, 10), Some(RED));
        assert_eq!(canvas.pixel(10, 2), Some(RED));
        assert_eq!(canvas.pixel(10, 10), Some(Rgba::TRANSPARENT));
    }

    #[test]
    fn later_operations_paint_over_earlier_ones() {
        let blue = Rgba(0, 0, 255, 255);
        let canvas = Canvas::new(9, 9)
            .draw_all([
                DrawOp::FilledCircle {
                    cx: 4,
                    cy: 4,
                    radius: 3,
                    color: RED,
                },
                DrawOp::Line {
                    x1: 0,
                    y1: 4,
                    x2: 8,
                    y2: 4,
                    color: blue,
                },
            ])
            .execute_ops();

        assert_eq!(canvas.pixel(4, 4), Some(blue));
        assert_eq!(canvas.pixel(4, 3), Some(RED));
    }

    #[test]
    fn save_png_reports_bad_path() {
        let canvas = Canvas::new(4, 4).execute_ops();
        let err = canvas.save_png("/nonexistent-dir/radar.png").unwrap_err();
        assert!(format!("{err:#}").contains("radar.png"));
    }
}
