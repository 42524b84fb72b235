use clap::Args;

use voidmap_core::config::{Config, OutputFormat};
use voidmap_core::{Rect, Scene, log_debug, log_error};

/// Output flags shared by the decomposing subcommands.
#[derive(Args)]
pub struct OutputArgs {
    /// Merge edge-adjacent voids that share a side
    #[arg(long)]
    pub group: bool,
    /// Print the voids as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Decomposes `scene` and prints the voids.
///
/// Command-line flags switch grouping and JSON on; the config file
/// supplies the defaults.
pub fn run(scene: &Scene, args: &OutputArgs, config: &Config) {
    let grouped = args.group || config.output.group;
    let json = args.json || config.output.format == OutputFormat::Json;

    let voids = match scene.map(grouped) {
        Ok(voids) => voids,
        Err(e) => {
            log_error!("decomposition failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log_debug!("{} voids (grouped: {grouped})", voids.len());

    if json {
        print_json(&voids);
    } else {
        print_text(&voids);
    }
}

fn print_text(voids: &[Rect]) {
    for v in voids {
        println!("{v}");
    }
    println!("\n{} voids found", voids.len());
}

fn print_json(voids: &[Rect]) {
    match serde_json::to_string_pretty(voids) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Error: could not serialize voids: {e}");
            std::process::exit(1);
        }
    }
}
