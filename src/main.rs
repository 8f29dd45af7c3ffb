//! Terminal demo for the gloam renderer: loads a scene, orbits a camera
//! through it, and prints the framebuffer as ANSI frames.

mod app;
mod ticker;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gloam", about = "Animated terminal raycaster demo")]
struct Args {
    /// Scene TOML file; the built-in demo scene is used when omitted.
    #[arg(long)]
    scene: Option<PathBuf>,

    /// View width in character cells.
    #[arg(long, default_value_t = 100)]
    width: usize,

    /// View height in character cells.
    #[arg(long, default_value_t = 36)]
    height: usize,

    /// Horizontal field of view in radians.
    #[arg(long, default_value_t = 2.0)]
    fov_x: f64,

    /// Vertical field of view in radians.
    #[arg(long, default_value_t = 1.5)]
    fov_y: f64,

    /// Wall-pass worker threads; 0 renders on this thread.
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Frames to render before exiting.
    #[arg(long, default_value_t = 400)]
    frames: u64,

    /// Milliseconds per frame.
    #[arg(long, default_value_t = 50)]
    tick_ms: u64,

    /// Render and pace without printing frames (timing runs).
    #[arg(long)]
    headless: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = app::run(&args) {
        eprintln!("gloam: {e}");
        std::process::exit(1);
    }
}
