pub mod check;
pub mod generate;
pub mod info;

use std::path::Path;

/// Layout of a generated model-data crate, shared by `generate` and `check`.
pub(crate) struct CrateLayout {
    pub models_dir: std::path::PathBuf,
    pub manifest_path: std::path::PathBuf,
    pub defining_unit_path: std::path::PathBuf,
}

impl CrateLayout {
    pub fn of(crate_dir: &Path) -> Self {
        let models_dir = crate_dir.join("models");
        Self {
            manifest_path: models_dir.join("model_data.manifest.json"),
            defining_unit_path: crate_dir.join("src").join("model_data.rs"),
            models_dir,
        }
    }
}
