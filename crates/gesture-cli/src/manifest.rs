use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Sidecar record written next to the copied artifact by `generate`,
/// read back by `check` to cross-verify the generated crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelManifest {
    /// File name of the artifact copied into the crate's `models/` directory.
    pub artifact: String,
    /// Byte length of the artifact at generation time.
    pub length: usize,
}

impl ModelManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read manifest {}", path.display()))?;
        let manifest = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse manifest {}", path.display()))?;
        Ok(manifest)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)
            .with_context(|| format!("failed to write manifest {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_round_trip() {
        let manifest = ModelManifest {
            artifact: "gesture_recognition.tflite".to_string(),
            length: 960,
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed: ModelManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, manifest);
    }
}
