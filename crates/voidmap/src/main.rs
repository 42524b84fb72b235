mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use voidmap_core::config;

#[derive(Parser)]
#[command(
    name = "voidmap",
    version,
    about = "Find the free rectangles left in an area after placing boxes"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Decompose the free space of a scene file
    Map {
        /// Scene file (TOML, or JSON with a .json extension)
        scene: PathBuf,
        #[command(flatten)]
        output: commands::output::OutputArgs,
    },
    /// Decompose the free space of an area given on the command line
    Rect(commands::rect::RectArgs),
    /// Report boxes that overlap, are empty, or leave the area
    Check {
        /// Scene file (TOML, or JSON with a .json extension)
        scene: PathBuf,
    },
    /// Print the buffer size that always fits the voids of N boxes
    Capacity {
        /// Number of occupied boxes
        boxes: usize,
    },
}

fn main() {
    let cli = Cli::parse();
    let config = config::load();
    voidmap_core::log::init(&config.logging);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Map { scene, output } => commands::map::execute(&scene, &output, &config),
        Commands::Rect(args) => commands::rect::execute(&args, &config),
        Commands::Check { scene } => commands::check::execute(&scene),
        Commands::Capacity { boxes } => commands::capacity::execute(boxes),
    }
}
