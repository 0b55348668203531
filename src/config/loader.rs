//! Reading and writing YAML configuration files

use super::schema::EnergySpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Read and parse a config file without validating it.
pub fn parse_config<P: AsRef<Path>>(config_path: P) -> Result<EnergySpec> {
    let path = config_path.as_ref();
    let yaml_content = fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    serde_yaml::from_str(&yaml_content)
        .map_err(|e| Error::Config(format!("Failed to parse YAML config {}: {e}", path.display())))
}

/// Read, parse and validate a config file.
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<EnergySpec> {
    let spec = parse_config(&config_path)?;
    validate_config(&spec)?;
    tracing::debug!(path = %config_path.as_ref().display(), "config loaded");
    Ok(spec)
}

/// `path` when given, otherwise the default specification.
pub fn load_or_default(path: Option<&Path>) -> Result<EnergySpec> {
    match path {
        Some(p) => load_config(p),
        None => Ok(EnergySpec::default()),
    }
}

/// Serialize a specification to YAML.
pub fn to_yaml(spec: &EnergySpec) -> Result<String> {
    serde_yaml::to_string(spec).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))
}

/// Write `spec` to `path`; an existing file is only replaced with `force`.
pub fn save_config<P: AsRef<Path>>(spec: &EnergySpec, path: P, force: bool) -> Result<()> {
    let path = path.as_ref();
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let yaml = to_yaml(spec)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::persistence(path, e))?;
    }
    fs::write(path, yaml).map_err(|e| Error::persistence(path, e))
}
