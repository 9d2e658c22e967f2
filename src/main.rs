mod export;
mod geometry;
mod relativity;
mod render;
mod scene;
mod tui;
mod viewport;

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};

use relativity::special::valid_beta;
use scene::Scene;
use viewport::Viewport;

/// Interactive Minkowski spacetime diagram
#[derive(Parser)]
#[command(name = "minkdiag", about = "Lorentz-boosted spacetime diagrams in the terminal or as PNG")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive terminal diagram
    Tui,
    /// Render a single frame to a PNG file
    Render(RenderArgs),
}

#[derive(clap::Args)]
struct RenderArgs {
    /// Boost parameter, strictly between -1 and 1
    #[arg(long, default_value_t = 0.0)]
    beta: f64,
    /// Velocity worldline through the origin; repeat for up to six
    #[arg(long = "velocity")]
    velocities: Vec<f64>,
    /// Add the extended body spanning x = 0..2
    #[arg(long)]
    cat: bool,
    /// Add the ladder-barn paradox pair
    #[arg(long)]
    ladder_barn: bool,
    /// Draw the twin-paradox paths
    #[arg(long)]
    twin_paradox: bool,
    /// Draw the constant-proper-time hyperbolas
    #[arg(long)]
    hyperbolas: bool,
    #[arg(long, default_value_t = 2.0)]
    zoom: f64,
    #[arg(long, default_value_t = 0.0)]
    pan_x: f64,
    #[arg(long, default_value_t = 0.0)]
    pan_t: f64,
    #[arg(long, default_value_t = 1600)]
    width: u32,
    #[arg(long, default_value_t = 1000)]
    height: u32,
    /// Output file
    #[arg(long, default_value = "diagram.png")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tui) | None => tui::start()?,
        Some(Commands::Render(args)) => run_render(&args)?,
    }

    Ok(())
}

fn run_render(args: &RenderArgs) -> Result<()> {
    if !valid_beta(args.beta) {
        bail!("beta must be strictly between -1 and 1, got {}", args.beta);
    }
    if !(args.zoom.is_finite() && args.zoom > 0.0) {
        bail!("zoom must be a positive number, got {}", args.zoom);
    }

    let mut scene = Scene::new();
    for &v in &args.velocities {
        scene.add_velocity(v)?;
    }
    if args.cat {
        scene.add_cat()?;
    }
    if args.ladder_barn {
        scene.add_ladder_barn(args.beta)?;
    }
    if args.twin_paradox {
        scene.show_twin_paradox()?;
    }
    if args.hyperbolas {
        scene.show_hyperbolas()?;
    }

    let viewport = Viewport {
        width: f64::from(args.width),
        height: f64::from(args.height),
        pan_x: args.pan_x,
        pan_t: args.pan_t,
        zoom: args.zoom,
    };

    let cmds = render::render(&scene, args.beta, &viewport);
    export::save_png(&cmds, args.width, args.height, &args.out)?;
    println!("Diagram saved to {}", args.out.display());
    Ok(())
}
