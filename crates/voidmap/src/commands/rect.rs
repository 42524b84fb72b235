use clap::Args;

use voidmap_core::config::Config;
use voidmap_core::{Rect, Scene, log_info};

use super::output::{self, OutputArgs};

/// Arguments for the `rect` subcommand.
#[derive(Args)]
pub struct RectArgs {
    /// Area to tile, as X,Y,WIDTH,HEIGHT
    #[arg(long, value_parser = parse_rect)]
    area: Rect,
    /// Occupied box as X,Y,WIDTH,HEIGHT (repeatable)
    #[arg(long = "box", value_parser = parse_rect)]
    boxes: Vec<Rect>,
    #[command(flatten)]
    output: OutputArgs,
}

pub fn execute(args: &RectArgs, config: &Config) {
    log_info!("mapping {} with {} boxes", args.area, args.boxes.len());
    let scene = Scene::new(args.area, args.boxes.clone());
    output::run(&scene, &args.output, config);
}

/// Parses `X,Y,WIDTH,HEIGHT` into a rectangle.
fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, w, h] = parts.as_slice() else {
        return Err(format!("expected X,Y,WIDTH,HEIGHT, got \"{s}\""));
    };
    let num = |v: &str| {
        v.parse::<u16>()
            .map_err(|e| format!("invalid coordinate \"{v}\": {e}"))
    };
    Ok(Rect::new(num(*x)?, num(*y)?, num(*w)?, num(*h)?))
}
