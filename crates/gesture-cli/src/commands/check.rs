use anyhow::{Context, Result, bail};
use gesture_model_data::ModelBlob;
use regex::Regex;
use std::fs;
use std::path::Path;

use super::CrateLayout;
use crate::ModelManifest;

pub fn execute(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let [crate_dir] = args else {
        return Err("Usage: gesture-edge check <crate-dir>".into());
    };
    run(Path::new(crate_dir))?;
    Ok(())
}

fn run(crate_dir: &Path) -> Result<()> {
    let layout = CrateLayout::of(crate_dir);
    let manifest = ModelManifest::load(&layout.manifest_path)?;

    let artifact_path = layout.models_dir.join(&manifest.artifact);
    let bytes = fs::read(&artifact_path)
        .with_context(|| format!("failed to read artifact {}", artifact_path.display()))?;

    // Manifest length vs actual artifact extent.
    ModelBlob::from_parts(&bytes, manifest.length)
        .verify()
        .with_context(|| format!("artifact {} fails verification", manifest.artifact))?;

    // Declared length literal in the defining unit vs actual extent.
    let unit = fs::read_to_string(&layout.defining_unit_path).with_context(|| {
        format!(
            "failed to read defining unit {}",
            layout.defining_unit_path.display()
        )
    })?;
    let declared = extract_declared_len(&unit)?;
    if declared != bytes.len() {
        bail!(
            "defining unit declares {} bytes but artifact {} has {}",
            declared,
            manifest.artifact,
            bytes.len()
        );
    }

    tracing::debug!(artifact = %manifest.artifact, length = bytes.len(), "model data consistent");
    println!(
        "OK: {} ({} bytes, declared length matches)",
        manifest.artifact,
        bytes.len()
    );
    Ok(())
}

/// Recovers the length literal from a generated defining unit.
pub(crate) fn extract_declared_len(unit: &str) -> Result<usize> {
    let re = Regex::new(r"GESTURE_MODEL_DATA_LEN: usize = (\d+)")
        .context("failed to compile declared-length pattern")?;
    let captures = re
        .captures(unit)
        .context("defining unit has no GESTURE_MODEL_DATA_LEN declaration")?;
    captures[1]
        .parse()
        .context("declared length is not a valid usize")
}
