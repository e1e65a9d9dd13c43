use anyhow::{Context, Result};
use gesture_model_data::ModelBlob;
use std::fs;
use std::path::Path;

pub fn execute(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let [artifact] = args else {
        return Err("Usage: gesture-edge info <artifact>".into());
    };
    run(Path::new(artifact))?;
    Ok(())
}

fn run(artifact: &Path) -> Result<()> {
    let bytes = fs::read(artifact)
        .with_context(|| format!("failed to read artifact {}", artifact.display()))?;
    let blob = ModelBlob::from_parts(&bytes, bytes.len());

    println!("{}", artifact.display());
    println!("  length: {} bytes", blob.len());
    if blob.is_empty() {
        println!("  warning: artifact is empty and cannot be loaded");
        return Ok(());
    }

    // FlatBuffers file identifier sits at bytes 4..8. The blob stays opaque
    // beyond this fixed-offset peek.
    match file_identifier(blob.data()) {
        Some(id) => {
            println!("  file identifier: {}", id);
            if id == "TFL3" {
                println!("  format: TensorFlow Lite model");
            }
        }
        None => println!("  no file identifier (artifact shorter than 8 bytes)"),
    }
    Ok(())
}

fn file_identifier(bytes: &[u8]) -> Option<String> {
    let id = bytes.get(4..8)?;
    Some(
        id.iter()
            .map(|&b| {
                if b.is_ascii_graphic() {
                    b as char
                } else {
                    '.'
                }
            })
            .collect(),
    )
}
