use std::path::Path;

use voidmap_core::config::Config;
use voidmap_core::{Scene, log_error, log_info};

use super::output::{self, OutputArgs};

pub fn execute(path: &Path, args: &OutputArgs, config: &Config) {
    let scene = match Scene::load(path) {
        Ok(scene) => scene,
        Err(e) => {
            log_error!("loading scene failed: {e}");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    log_info!(
        "mapping {} with {} boxes",
        path.display(),
        scene.boxes.len()
    );
    output::run(&scene, args, config);
}
