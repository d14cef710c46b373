use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    //  Environment variable parameter - the distributed directory
    let Ok(staging_dir) = env::var("TRUNK_STAGING_DIR") else {
        eprintln!("TRUNK_STAGING_DIR is not set, skipping html rewrite");
        return;
    };

    //  Using the configured html output name (set in Trunk.toml)
    let staged_html_path = PathBuf::from(staging_dir).join("ProductShowcase.html");

    let html = match fs::read_to_string(&staged_html_path) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Could not read {}: {e}", staged_html_path.display());
            return;
        }
    };

    // Trunk emits absolute script paths; the viewer is served from a sub-path.
    let html = html
        .replace("/product-showcase.js", "./product-showcase.js")
        .replace("/product-showcase_bg.wasm", "./product-showcase_bg.wasm");

    if let Err(e) = fs::write(&staged_html_path, html) {
        eprintln!("Could not write {}: {e}", staged_html_path.display());
    }
}
