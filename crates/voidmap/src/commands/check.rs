use std::path::Path;

use voidmap_core::{Scene, log_warn};

const OK: &str = "\x1b[32m[ok]\x1b[0m";
const WARN: &str = "\x1b[33m[warn]\x1b[0m";
const FAIL: &str = "\x1b[31m[fail]\x1b[0m";

/// Reports placement problems in a scene.
///
/// Exits with status 1 when any box breaks the preconditions, since
/// the decomposition of such a scene is unspecified.
pub fn execute(path: &Path) {
    let scene = match Scene::load(path) {
        Ok(scene) => scene,
        Err(e) => {
            println!("  {FAIL} {e}");
            std::process::exit(1);
        }
    };
    println!("  {OK} {} parsed", path.display());

    if scene.area.is_empty() {
        println!("  {WARN} Area {} is empty", scene.area);
    }
    if scene.boxes.len() > voidmap_core::MAX_BOXES {
        println!(
            "  {FAIL} {} boxes exceed the maximum of {}",
            scene.boxes.len(),
            voidmap_core::MAX_BOXES
        );
        std::process::exit(1);
    }

    let issues = scene.check();
    if issues.is_empty() {
        println!("  {OK} All {} box(es) are valid", scene.boxes.len());
        return;
    }
    for issue in &issues {
        log_warn!("{}: {issue}", path.display());
        println!("  {FAIL} {issue}");
    }
    std::process::exit(1);
}
