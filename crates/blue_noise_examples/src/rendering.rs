//! PNG rendering helpers shared by the example binaries.
use std::path::Path;

use anyhow::Result;
use glam::Vec2;
use image::{Rgb, RgbImage};
use tracing_subscriber::EnvFilter;

/// Initializes a tracing subscriber for the examples. Respects `RUST_LOG`,
/// defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// How to rasterize a point set into a square image.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Image side length in pixels.
    pub image_size: u32,
    /// Background color.
    pub background: [u8; 3],
    /// Mark color for each sample.
    pub point_color: [u8; 3],
    /// Mark radius in pixels; 0 plots a single pixel per sample.
    pub point_radius: u32,
}

impl RenderConfig {
    /// Creates a config for a square image of the given side length.
    pub fn new(image_size: u32) -> Self {
        Self {
            image_size,
            background: [255, 255, 255],
            point_color: [0, 0, 0],
            point_radius: 0,
        }
    }

    /// Sets the background color.
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Sets the mark color.
    pub fn with_point_color(mut self, point_color: [u8; 3]) -> Self {
        self.point_color = point_color;
        self
    }

    /// Sets the mark radius in pixels.
    pub fn with_point_radius(mut self, point_radius: u32) -> Self {
        self.point_radius = point_radius;
        self
    }
}

/// Rasterizes `points` (coordinates in `[0, sample_range]`) onto a cleared
/// square image and writes it as PNG. The y axis is flipped so the domain
/// origin ends up in the bottom-left corner of the image.
pub fn render_points_to_png(
    points: &[Vec2],
    sample_range: f32,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> Result<()> {
    let size = config.image_size.max(1);
    let mut img = RgbImage::from_pixel(size, size, Rgb(config.background));
    let scale = size as f32 / sample_range;

    for p in points {
        let px = (p.x * scale).floor() as i64;
        let py = size as i64 - 1 - (p.y * scale).floor() as i64;
        plot_disk(&mut img, px, py, config.point_radius as i64, config.point_color);
    }

    img.save(path.as_ref())?;
    Ok(())
}

fn plot_disk(img: &mut RgbImage, cx: i64, cy: i64, radius: i64, color: [u8; 3]) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let (x, y) = (cx + dx, cy + dy);
            if x >= 0 && y >= 0 && x < w && y < h {
                img.put_pixel(x as u32, y as u32, Rgb(color));
            }
        }
    }
}
