use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, SceneDescription};
use glint_renderer::{render, save_image, World};
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;

mod cli;

use cli::Args;

fn init_logger(args: &Args) {
    let mut builder = env_logger::Builder::from_default_env();
    match args.log_level {
        Some(level) => {
            builder.filter_level(LevelFilter::from(level));
        }
        None if std::env::var_os("RUST_LOG").is_none() => {
            builder.filter_level(LevelFilter::Info);
        }
        None => {}
    }
    builder.init();
}

fn progress_bar(rows: u32, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(rows as u64);
    // The template is a literal; a parse failure falls back to the default bar
    if let Ok(style) = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} Rows ({per_sec}) {msg}")
    {
        pb.set_style(style.progress_chars("=>-"));
    }
    pb
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(&args);

    if args.print_default_scene {
        let json = serde_json::to_string_pretty(&SceneDescription::default_scene())
            .context("Failed to serialize the built-in scene")?;
        println!("{}", json);
        return Ok(());
    }

    log::info!("Starting Glint");

    let mut scene = match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the built-in scene");
            SceneDescription::default_scene()
        }
    };
    args.apply_overrides(&mut scene.options);
    scene
        .validate()
        .context("Invalid render options after applying command line flags")?;

    let world = World::from_description(&scene);

    let pb = progress_bar(scene.options.height, args.no_progress);
    let image = render(&world, &scene.options, |_| pb.inc(1));
    pb.finish_with_message("done");

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    Ok(())
}
