use crate::PageParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Destination for the JSON detection report, if any.
    pub json_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    /// Working-resolution factor, snapped to a power-of-two downscale.
    #[serde(default = "default_scale")]
    pub scale: f32,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub page_params: PageParams,
}

fn default_scale() -> f32 {
    0.5
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}
