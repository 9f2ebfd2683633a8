use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use campus_nav_core::prelude::*;
use serde::Deserialize;

use crate::cli::Args;

/// Contents of the optional TOML configuration file
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub paths: Option<PathBuf>,
    pub footprints: Option<PathBuf>,
    pub unnamed_building_prefix: Option<String>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))
    }
}

/// Effective settings after command-line flags override the file
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub paths: PathBuf,
    pub footprints: Option<PathBuf>,
    pub unnamed_building_prefix: Option<String>,
    pub log_level: String,
}

impl AppConfig {
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let Some(paths) = args.paths.clone().or(file.paths) else {
            bail!("No path data given, pass --paths or set `paths` in the config file");
        };

        Ok(Self {
            paths,
            footprints: args.footprints.clone().or(file.footprints),
            unnamed_building_prefix: file.unnamed_building_prefix,
            log_level: args
                .log_level
                .clone()
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Reads the data files and builds the routing model
    pub fn load_model(&self) -> Result<CampusModel> {
        let paths = read_source(&self.paths)?;
        let mut model_config = CampusModelConfig::new(paths);
        if let Some(footprints) = &self.footprints {
            model_config = model_config.with_footprints(read_source(footprints)?);
        }
        if let Some(prefix) = &self.unnamed_building_prefix {
            model_config = model_config.with_unnamed_prefix(prefix.clone());
        }

        create_campus_model(&model_config).context("Failed to build campus model")
    }
}

fn read_source(path: &Path) -> Result<String> {
    tracing::debug!("Reading {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}
