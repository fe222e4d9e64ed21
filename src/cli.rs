//! Command line surface.

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::config::{resolve_api_key, Config, CredentialStatus, SecureString};
use crate::gemini::ImageTransformer;
use crate::studio::Studio;
use crate::style::PRESETS;

#[derive(Debug, Parser)]
#[command(name = "bananatoon", version, about = "Turn photos into cartoons with Gemini")]
pub struct Cli {
    /// Config file (default: ~/.config/bananatoon/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the Gemini API root URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the image model
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive terminal UI (default)
    Tui,
    /// Cartoonify one image and save the result
    Transform(TransformArgs),
    /// List the preset styles
    Presets,
}

#[derive(Debug, Args)]
pub struct TransformArgs {
    /// Image to transform
    pub image: PathBuf,

    /// Preset number (see `bananatoon presets`)
    #[arg(long, short, conflicts_with = "style")]
    pub preset: Option<usize>,

    /// Custom style text; overrides any preset
    #[arg(long, short)]
    pub style: Option<String>,

    /// Output directory (default: download.dir from config)
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command line overrides.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::load_from(&path)?;

        if let Some(base_url) = &self.base_url {
            config.gemini.base_url = base_url.clone();
        }
        if let Some(model) = &self.model {
            config.gemini.model = model.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Resolve the API key from the process environment, logging once when
/// it is missing. A missing key is not fatal.
pub fn startup_api_key(config: &Config) -> Option<SecureString> {
    let status = resolve_api_key(&config.gemini, |name| std::env::var(name).ok());
    if let CredentialStatus::Unconfigured { reason } = &status {
        tracing::warn!(reason = %reason, "Gemini API key missing; every transformation will fail");
    }
    status.key().cloned()
}

/// Lines printed by `bananatoon presets`.
pub fn preset_listing() -> Vec<String> {
    PRESETS
        .iter()
        .enumerate()
        .map(|(i, preset)| format!("{:>2}. {}", i + 1, preset))
        .collect()
}

/// Run one transformation end to end and return the saved file.
pub async fn run_transform<T: ImageTransformer>(
    args: &TransformArgs,
    download_dir: &Path,
    transformer: &T,
) -> anyhow::Result<PathBuf> {
    let mut studio = Studio::new();
    studio
        .select_file(&args.image)
        .with_context(|| format!("Cannot use '{}'", args.image.display()))?;

    if let Some(number) = args.preset {
        if number == 0 || number > PRESETS.len() {
            bail!("Preset must be between 1 and {}", PRESETS.len());
        }
        studio.select_preset(number - 1);
    }
    if let Some(style) = &args.style {
        studio.set_custom_style(style.clone());
    }

    tracing::info!(style = %studio.state().style.effective(), "Cartoonifying");
    studio.generate_with(transformer).await;

    if let Some(error) = studio.state().error.as_deref() {
        bail!("{}", error);
    }

    let out = args.out.as_deref().unwrap_or(download_dir);
    Ok(studio.download(out, SystemTime::now())?)
}
