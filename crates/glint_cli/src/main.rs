use anyhow::{Context, Result};
use clap::Parser;
use glint_renderer::demo::{demo_camera, demo_scene};
use glint_renderer::{render_scene, Color, ColorPolicy, RasterBuffer, RenderConfig};
use std::path::Path;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    let camera = demo_camera()
        .with_resolution(args.width, args.height)
        .with_fov_degrees(args.fov);
    let [r, g, b] = args.background;
    let scene = demo_scene(camera, Color::new(r, g, b)).context("Failed to build demo scene")?;

    let config = RenderConfig {
        max_depth: args.max_depth,
        color_policy: if args.no_clamp {
            ColorPolicy::Truncate
        } else {
            ColorPolicy::Clamp
        },
        bucket_size: args.bucket_size,
        parallel: !args.serial,
        ..Default::default()
    };

    let output = render_scene(&scene, &config).context("Render failed")?;

    save_png(&output.image, Path::new(&args.output))?;
    log::info!("Saved {}", args.output);

    Ok(())
}

/// Hand the finished raster to the PNG encoder.
fn save_png(raster: &RasterBuffer, path: &Path) -> Result<()> {
    let image = image::RgbImage::from_raw(raster.width, raster.height, raster.to_rgb8())
        .context("Raster size does not match its dimensions")?;

    image
        .save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
