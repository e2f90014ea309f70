//! Bucket-based tile rendering.
//!
//! Divides the raster into tiles (buckets) that are rendered independently
//! and in parallel using rayon. Every pixel depends only on the scene and its
//! own coordinates, so buckets share nothing but a `&Scene`.

use rayon::prelude::*;

use crate::renderer::{
    color_to_rgb, raster_position, render_pixel, RasterBuffer, RenderConfig, RenderOutput, Rgb,
    TraceStats,
};
use crate::error::RenderResult;
use crate::Scene;

/// A rectangular region of the raster to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// X coordinate of bucket's top-left corner
    pub x: u32,
    /// Y coordinate of bucket's top-left corner
    pub y: u32,
    /// Width of the bucket in pixels
    pub width: u32,
    /// Height of the bucket in pixels
    pub height: u32,
    /// Index of this bucket in the render order
    pub index: usize,
}

impl Bucket {
    /// Create a new bucket.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self { x, y, width, height, index }
    }

    /// Get the total number of pixels in this bucket.
    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }
}

/// Default bucket size in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// Generate buckets covering a raster, ordered from the center outward.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    let mut index = 0;

    let mut y = 0;
    while y < height {
        let mut x = 0;
        while x < width {
            let bw = bucket_size.min(width - x);
            let bh = bucket_size.min(height - y);
            buckets.push(Bucket::new(x, y, bw, bh, index));
            index += 1;
            x += bucket_size;
        }
        y += bucket_size;
    }

    sort_spiral(&mut buckets, width, height);

    // Update indices after sorting
    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Sort buckets by distance from the raster center.
fn sort_spiral(buckets: &mut [Bucket], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;

    let dist = |b: &Bucket| {
        let cx = b.x as f64 + b.width as f64 / 2.0;
        let cy = b.y as f64 + b.height as f64 / 2.0;
        (cx - center_x).powi(2) + (cy - center_y).powi(2)
    };

    buckets.sort_by(|a, b| dist(a).total_cmp(&dist(b)));
}

/// Result of rendering a bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    /// The bucket that was rendered
    pub bucket: Bucket,
    /// Pixels in raster row-major order within the bucket
    pub pixels: Vec<Rgb>,
    pub stats: TraceStats,
}

/// Render a single bucket.
///
/// Bucket coordinates are raster coordinates; each raster cell is traced
/// through the camera pixel that mirrors onto it.
pub fn render_bucket(bucket: &Bucket, scene: &Scene, config: &RenderConfig) -> BucketResult {
    let (width, height) = (scene.width(), scene.height());
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);
    let mut stats = TraceStats::default();

    for local_y in 0..bucket.height {
        for local_x in 0..bucket.width {
            // The raster mirror is its own inverse
            let (x, y) = raster_position(bucket.x + local_x, bucket.y + local_y, width, height);
            let color = render_pixel(scene, x, y, config, &mut stats);
            pixels.push(color_to_rgb(color, config.color_policy));
        }
    }

    BucketResult {
        bucket: *bucket,
        pixels,
        stats,
    }
}

/// Render the scene with buckets spread over the rayon thread pool.
///
/// Produces the same raster as [`crate::render`].
pub fn render_parallel(scene: &Scene, config: &RenderConfig) -> RenderResult<RenderOutput> {
    config.validate()?;

    let (width, height) = (scene.width(), scene.height());
    let buckets = generate_buckets(width, height, config.bucket_size);
    log::debug!(
        "Rendering {} buckets of up to {}px on {} threads",
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| render_bucket(bucket, scene, config))
        .collect();

    let mut image = RasterBuffer::new(width, height);
    let mut stats = TraceStats::default();

    for result in &results {
        let b = result.bucket;
        for (i, &rgb) in result.pixels.iter().enumerate() {
            let i = i as u32;
            image.set(b.x + i % b.width, b.y + i / b.width, rgb);
        }
        stats.merge(&result.stats);
    }

    Ok(RenderOutput { image, stats })
}
