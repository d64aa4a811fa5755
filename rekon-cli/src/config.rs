use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::export::DEFAULT_WORKBOOK_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputSection,
    pub convert: ConvertSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Workbook file name used when no --out path is given.
    pub file_name: String,
    pub sheet_name: String,
    pub preview_rows: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertSection {
    /// Abort the whole run on the first failing file instead of
    /// skipping it.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputSection {
                file_name: DEFAULT_WORKBOOK_NAME.to_string(),
                sheet_name: "Sheet1".to_string(),
                preview_rows: 20,
            },
            convert: ConvertSection { strict: false },
        }
    }
}

pub fn rekon_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".rekon"))
}

pub fn ensure_rekon_home() -> Result<PathBuf> {
    let dir = rekon_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_rekon_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let cfg = Config::default();
    save_config(&cfg)?;
    println!("Wrote {}", p.display());
    Ok(())
}
