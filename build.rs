//! Build-time reference scan.
//!
//! Walks `assets/references/**` for image files and generates a static
//! manifest of `(relative path, served URL)` pairs. The manifest is the
//! sole input to catalog construction at runtime, so the image set is
//! fixed at compile time and no filesystem access happens in the browser.

use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Image extensions accepted by the scan (compared case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "avif"];

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Collect every image file under `dir`, depth-first.
///
/// Unreadable directories are skipped rather than failing the build;
/// a missing assets tree simply yields an empty manifest.
fn collect_images(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_images(&path, out);
        } else if is_image(&path) {
            out.push(path);
        }
    }
}

/// Convert a path to a forward-slash relative string from the crate root.
fn relative_slashed(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = rel.iter().filter_map(|p| p.to_str()).collect();
    Some(parts.join("/"))
}

fn main() {
    println!("cargo:rerun-if-changed=assets/references");

    let root = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set"));
    let references = root.join("assets").join("references");

    let mut images = Vec::new();
    collect_images(&references, &mut images);

    // Deterministic output regardless of directory iteration order.
    let mut paths: Vec<String> = images
        .iter()
        .filter_map(|p| relative_slashed(p, &root.join("assets")))
        .collect();
    paths.sort();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let dest = out_dir.join("reference_manifest.rs");
    let mut file = fs::File::create(&dest).expect("failed to create reference manifest");

    writeln!(
        file,
        "/// Reference images discovered at build time: (relative path, served URL)."
    )
    .unwrap();
    writeln!(file, "pub static REFERENCE_FILES: &[(&str, &str)] = &[").unwrap();
    for path in &paths {
        writeln!(file, "    ({:?}, {:?}),", path, format!("/assets/{path}")).unwrap();
    }
    writeln!(file, "];").unwrap();
}
