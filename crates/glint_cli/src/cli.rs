use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "glint")]
#[command(about = "Render the Glint demo scene to a PNG")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 400)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 400)]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 45.0)]
    pub fov: f64,

    /// Shading depth; 2 means the primary hit plus one reflection
    #[arg(long, default_value_t = glint_renderer::DEFAULT_MAX_DEPTH)]
    pub max_depth: u32,

    /// Render on the calling thread instead of the rayon pool
    #[arg(long)]
    pub serial: bool,

    /// Bucket edge length for parallel rendering
    #[arg(long, default_value_t = glint_renderer::DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Truncate colors without clamping (out-of-range channels saturate in the PNG)
    #[arg(long)]
    pub no_clamp: bool,

    /// Background color as R,G,B on a 0-255 scale
    #[arg(long, value_parser = parse_rgb, default_value = "0,0,0")]
    pub background: [f64; 3],

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Output PNG path
    #[arg(short, long, default_value = "render.png")]
    pub output: String,
}

fn parse_rgb(s: &str) -> Result<[f64; 3], String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [r, g, b] = parts.as_slice() else {
        return Err(format!("expected R,G,B, got '{s}'"));
    };

    let channel = |c: &str| {
        c.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid color channel '{c}'"))
    };

    Ok([channel(*r)?, channel(*g)?, channel(*b)?])
}
