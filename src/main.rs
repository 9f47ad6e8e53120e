use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use pixelpaint::script::{self, Script, ScriptRunner};
use pixelpaint::{Config, ToolEngine, util};

#[derive(Parser, Debug)]
#[command(name = "pixelpaint")]
#[command(
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PIXELPAINT_GIT_HASH"), ")"),
    about = "Headless driver for the pixelpaint raster paint engine"
)]
struct Cli {
    /// Read configuration from PATH instead of ~/.config/pixelpaint/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,

    /// Replay a pointer event script against a fresh image
    #[arg(long, short = 'r', value_name = "SCRIPT")]
    replay: Option<PathBuf>,

    /// Override the initial image width
    #[arg(long, value_name = "N")]
    width: Option<u32>,

    /// Override the initial image height
    #[arg(long, value_name = "N")]
    height: Option<u32>,

    /// Fixed airbrush seed for reproducible output
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Print the final image as text ('.' background, '#' anything else)
    #[arg(long, action = ArgAction::SetTrue, requires = "replay")]
    ascii: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => {
                Config::create_default_file_at(path)?;
                path.clone()
            }
            None => Config::create_default_file()?,
        };
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = &cli.replay else {
        print_usage();
        return Ok(());
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    if cli.seed.is_some() {
        config.airbrush.seed = cli.seed;
    }
    // Overrides go through the same limits as file values
    config.validate_and_clamp();

    let source = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script: Script = source
        .parse()
        .with_context(|| format!("Failed to parse script {}", script_path.display()))?;

    let engine = ToolEngine::blank(
        config.canvas.width,
        config.canvas.height,
        config.engine_settings(),
    )
    .context("Failed to create the initial image")?;

    let mut runner = ScriptRunner::new(engine);
    runner
        .run(&script)
        .with_context(|| format!("Replay of {} failed", script_path.display()))?;
    let engine = runner.into_engine();

    print_summary(&engine);
    if cli.ascii {
        println!();
        print!(
            "{}",
            script::ascii_art(engine.surface(), engine.background_color())
        );
    }

    Ok(())
}

fn print_summary(engine: &ToolEngine) {
    let surface = engine.surface();
    let foreground = engine.foreground_color();
    let background = engine.background_color();
    println!("Image: {}x{}", surface.width(), surface.height());
    println!("Tool: {} (size {})", engine.active_tool(), engine.tool_size());
    println!(
        "Foreground: {} {foreground}",
        util::color_to_name(&foreground)
    );
    println!(
        "Background: {} {background}",
        util::color_to_name(&background)
    );
    println!("Painted pixels: {}", surface.count_not(background));
    println!(
        "Modified: {}",
        if engine.is_modified() { "yes" } else { "no" }
    );
}

fn print_usage() {
    println!("pixelpaint: Headless driver for the pixelpaint raster paint engine");
    println!();
    println!("Usage:");
    println!("  pixelpaint --replay SCRIPT [--ascii]   Replay pointer events and print the result");
    println!("  pixelpaint --init-config               Write a default config file");
    println!("  pixelpaint --help                      Show help");
    println!();
    println!("Script commands (one per line, '#' starts a comment):");
    println!("  new W H COLOR           Replace the image with a blank one");
    println!("  tool NAME               pencil, eraser, color-picker, airbrush, line");
    println!("  size N                  Tool size in pixels");
    println!("  fg COLOR / bg COLOR     Foreground / background color");
    println!("  press X Y [BUTTON]      Button press (left, right, middle)");
    println!("  release X Y [BUTTON]    Button release");
    println!("  motion X Y              Pointer motion (drag while a button is held)");
    println!("  enter X Y / leave       Pointer enters / leaves the canvas");
}
