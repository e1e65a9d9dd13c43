use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

use super::CrateLayout;
use crate::ModelManifest;

pub fn execute(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let [artifact, crate_dir] = args else {
        return Err("Usage: gesture-edge generate <artifact> <crate-dir>".into());
    };
    run(Path::new(artifact), Path::new(crate_dir))?;
    Ok(())
}

fn run(artifact: &Path, crate_dir: &Path) -> Result<()> {
    let bytes = fs::read(artifact)
        .with_context(|| format!("failed to read artifact {}", artifact.display()))?;
    if bytes.is_empty() {
        bail!(
            "artifact {} is empty; an empty model cannot be loaded",
            artifact.display()
        );
    }

    // The name lands in an include_bytes! path, so it must be valid UTF-8.
    let name = artifact
        .file_name()
        .with_context(|| format!("artifact path {} has no file name", artifact.display()))?
        .to_str()
        .with_context(|| {
            format!(
                "artifact file name {} is not valid UTF-8",
                artifact.display()
            )
        })?
        .to_string();

    let layout = CrateLayout::of(crate_dir);
    fs::create_dir_all(&layout.models_dir)
        .with_context(|| format!("failed to create {}", layout.models_dir.display()))?;
    let src_dir = crate_dir.join("src");
    fs::create_dir_all(&src_dir)
        .with_context(|| format!("failed to create {}", src_dir.display()))?;

    let copied = layout.models_dir.join(&name);
    fs::write(&copied, &bytes)
        .with_context(|| format!("failed to copy artifact to {}", copied.display()))?;

    let unit = render_defining_unit(&name, bytes.len());
    fs::write(&layout.defining_unit_path, unit).with_context(|| {
        format!(
            "failed to write defining unit {}",
            layout.defining_unit_path.display()
        )
    })?;

    let manifest = ModelManifest {
        artifact: name.clone(),
        length: bytes.len(),
    };
    manifest.save(&layout.manifest_path)?;

    tracing::info!(artifact = %name, length = bytes.len(), "generated model defining unit");
    println!("Generated model data for {}", crate_dir.display());
    println!("  artifact: {} ({} bytes)", name, bytes.len());
    println!("  defining unit: {}", layout.defining_unit_path.display());
    Ok(())
}

/// Renders the Rust defining unit for an artifact: the embedded data constant
/// and its declared length, written as a literal so `check` has something
/// real to cross-verify against the artifact.
pub(crate) fn render_defining_unit(artifact_name: &str, len: usize) -> String {
    format!(
        r#"// Generated by `gesture-edge generate`. Do not edit by hand.
//
// Source artifact: {artifact_name}

/// The raw gesture recognition model data
/// This uses a static include_bytes! macro to embed the model data
/// at compile time, ensuring it's always available
pub const GESTURE_MODEL_DATA: &[u8] = include_bytes!("../models/{artifact_name}");

/// Declared byte length of [`GESTURE_MODEL_DATA`], written by the generator
/// from the source artifact's extent
pub const GESTURE_MODEL_DATA_LEN: usize = {len};
"#
    )
}
