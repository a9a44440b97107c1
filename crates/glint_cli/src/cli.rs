use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_core::RenderOptions;
use log::LevelFilter;

/// Log levels accepted on the command line
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
#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "Recursive ray tracer with soft shadows", version)]
pub struct Args {
    /// Scene description (JSON); the built-in scene is used when omitted
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Output image (.ppm for binary PPM, anything else through the image crate)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Rays per pixel when jittering; the fixed grid always uses four
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Random light samples per shadow estimate
    #[arg(long)]
    pub shadow_samples: Option<u32>,

    /// Maximum reflection depth
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Use random sub-pixel offsets instead of the 2x2 grid
    #[arg(long)]
    pub jitter: bool,

    /// Seed for the per-row random generators
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level; RUST_LOG is used when omitted
    #[arg(long)]
    pub log_level: Option<LogLevel>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Print the built-in scene as JSON and exit
    #[arg(long)]
    pub print_default_scene: bool,
}

impl Args {
    /// Apply command line overrides on top of the scene's options.
    pub fn apply_overrides(&self, options: &mut RenderOptions) {
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(samples) = self.samples {
            options.samples_per_pixel = samples;
        }
        if let Some(shadow_samples) = self.shadow_samples {
            options.shadow_samples = shadow_samples;
        }
        if let Some(max_depth) = self.max_depth {
            options.max_depth = max_depth;
        }
        if self.jitter {
            options.jitter_antialiasing = true;
        }
        if let Some(seed) = self.seed {
            options.seed = seed;
        }

        if self.samples_ignored(options) {
            log::warn!(
                "--samples has no effect without jittered antialiasing; \
                 the fixed grid traces {} rays per pixel",
                options.rays_per_pixel()
            );
        }
    }

    /// True when `--samples` was given but the grid sampler is active.
    pub fn samples_ignored(&self, options: &RenderOptions) -> bool {
        self.samples.is_some() && !options.jitter_antialiasing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::GRID_RAYS_PER_PIXEL;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["glint"]);
        assert!(args.scene.is_none());
        assert_eq!(args.output, PathBuf::from("out.ppm"));
        assert!(!args.jitter && !args.no_progress);

        let mut options = RenderOptions::default();
        args.apply_overrides(&mut options);
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn test_flags_override_options() {
        let args = Args::parse_from([
            "glint",
            "--scene",
            "scene.json",
            "--width",
            "64",
            "--height",
            "32",
            "-s",
            "9",
            "--shadow-samples",
            "5",
            "--max-depth",
            "2",
            "--jitter",
            "--seed",
            "7",
            "--log-level",
            "debug",
        ]);

        let mut options = RenderOptions::default();
        args.apply_overrides(&mut options);

        assert_eq!(args.scene, Some(PathBuf::from("scene.json")));
        assert_eq!((options.width, options.height), (64, 32));
        assert_eq!(options.samples_per_pixel, 9);
        assert_eq!(options.shadow_samples, 5);
        assert_eq!(options.max_depth, 2);
        assert!(options.jitter_antialiasing);
        assert_eq!(options.seed, 7);
        assert_eq!(LevelFilter::from(args.log_level.unwrap()), LevelFilter::Debug);
    }

    #[test]
    fn test_samples_without_jitter_are_flagged() {
        let args = Args::parse_from(["glint", "--samples", "16"]);
        let mut options = RenderOptions::default();
        args.apply_overrides(&mut options);

        assert!(args.samples_ignored(&options));
        assert_eq!(options.rays_per_pixel(), GRID_RAYS_PER_PIXEL);

        // A scene file can turn jitter on without the flag
        options.jitter_antialiasing = true;
        assert!(!args.samples_ignored(&options));
        assert_eq!(options.rays_per_pixel(), 16);

        let jittered = Args::parse_from(["glint", "--samples", "16", "--jitter"]);
        let mut options = RenderOptions::default();
        jittered.apply_overrides(&mut options);
        assert!(!jittered.samples_ignored(&options));

        let defaults = Args::parse_from(["glint"]);
        assert!(!defaults.samples_ignored(&RenderOptions::default()));
    }

    #[test]
    fn test_bad_level_is_rejected() {
        assert!(Args::try_parse_from(["glint", "--log-level", "loud"]).is_err());
    }
}
