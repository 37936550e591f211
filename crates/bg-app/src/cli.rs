use std::path::PathBuf;

use anyhow::{Context, Result};
use bg_core::config::{GraphConfig, NegativePolicy, Orientation, load_config};
use clap::{Parser, Subcommand};

/// Print a braille bar graph of the given integers.
#[derive(Parser, Debug)]
#[command(name = "braillegraph", version, about, long_about = None)]
pub struct Cli {
    /// Ne pas afficher le saut de ligne final.
    #[arg(short = 'n', long, global = true, default_value_t = false)]
    pub no_newline: bool,

    /// Fichier de configuration TOML (section [graph]).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Politique pour les valeurs négatives : reject, zero, abs.
    #[arg(long, global = true)]
    pub negatives: Option<String>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: log::LevelFilter,

    #[command(subcommand)]
    pub direction: Direction,
}

/// Graph direction.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Direction {
    /// A horizontal graph (bars grow upward).
    Horizontal {
        /// An integer.
        #[arg(value_name = "N", required = true, allow_negative_numbers = true)]
        integers: Vec<i64>,
    },
    /// A vertical graph (bars grow rightward, 4 per line).
    Vertical {
        /// Separator for groups of bars.
        #[arg(short, long)]
        sep: Option<String>,

        /// An integer.
        #[arg(value_name = "N", required = true, allow_negative_numbers = true)]
        integers: Vec<i64>,
    },
}

impl Cli {
    /// Raw integers, in input order.
    #[must_use]
    pub fn integers(&self) -> &[i64] {
        match &self.direction {
            Direction::Horizontal { integers } | Direction::Vertical { integers, .. } => integers,
        }
    }

    /// Load the config file (if any) and apply the CLI overrides on top.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded or if
    /// `--negatives` names an unknown policy.
    pub fn resolve_config(&self) -> Result<GraphConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GraphConfig::default(),
        };

        match &self.direction {
            Direction::Horizontal { .. } => config.orientation = Orientation::Horizontal,
            Direction::Vertical { sep, .. } => {
                config.orientation = Orientation::Vertical;
                if let Some(sep) = sep {
                    config.separator.clone_from(sep);
                }
            }
        }
        if let Some(ref name) = self.negatives {
            config.negative_policy = name
                .parse::<NegativePolicy>()
                .context("invalid --negatives value")?;
        }
        if self.no_newline {
            config.trailing_newline = false;
        }

        log::debug!("config résolue : {config:?}");
        Ok(config)
    }
}
