use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::Magnitude;
use crate::error::CoreError;

/// Configuration complète d'un rendu de graphe.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use bg_core::config::{GraphConfig, Orientation};
/// let config = GraphConfig::default();
/// assert_eq!(config.orientation, Orientation::Vertical);
/// assert_eq!(config.separator, "\n");
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct GraphConfig {
    /// "Vertical" | "Horizontal"
    pub orientation: Orientation,
    /// Separator between vertical lines (one line per group of 4 bars).
    pub separator: String,
    /// What to do with negative input values.
    pub negative_policy: NegativePolicy,
    /// Print a newline after the graph.
    pub trailing_newline: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Vertical,
            separator: "\n".to_string(),
            negative_policy: NegativePolicy::Reject,
            trailing_newline: true,
        }
    }
}

/// Graph orientation.
///
/// # Example
/// ```
/// use bg_core::config::Orientation;
/// let o = Orientation::default();
/// assert!(matches!(o, Orientation::Vertical));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum Orientation {
    /// Bars grow left to right, 4 bars per line of cells.
    #[default]
    Vertical,
    /// Bars grow bottom to top, 2 bars per column of cells.
    Horizontal,
}

/// Policy applied to negative input values before rendering.
///
/// # Example
/// ```
/// use bg_core::config::NegativePolicy;
/// assert_eq!(NegativePolicy::Zero.apply(-3).unwrap(), 0);
/// assert_eq!(NegativePolicy::Absolute.apply(-3).unwrap(), 3);
/// assert!(NegativePolicy::Reject.apply(-3).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum NegativePolicy {
    /// Refuse negative values.
    #[default]
    Reject,
    /// Render negative values as an empty bar.
    Zero,
    /// Render the absolute value.
    Absolute,
}

impl NegativePolicy {
    /// Convert a raw signed value to a `Magnitude`.
    ///
    /// # Errors
    /// Returns [`CoreError::NegativeMagnitude`] for a negative value under
    /// `Reject`, and [`CoreError::MagnitudeOverflow`] if the result does not
    /// fit a `Magnitude`.
    pub fn apply(self, value: i64) -> Result<Magnitude, CoreError> {
        let unsigned = match (self, value < 0) {
            (Self::Reject, true) => return Err(CoreError::NegativeMagnitude { value }),
            (Self::Zero, true) => 0,
            (_, _) => value.unsigned_abs(),
        };
        Magnitude::try_from(unsigned).map_err(|_| CoreError::MagnitudeOverflow { value })
    }

    /// Apply the policy to every value, failing on the first rejected one.
    ///
    /// # Errors
    /// See [`NegativePolicy::apply`].
    pub fn apply_all(self, values: &[i64]) -> Result<Vec<Magnitude>, CoreError> {
        values.iter().map(|&v| self.apply(v)).collect()
    }
}

impl FromStr for NegativePolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "zero" => Ok(Self::Zero),
            "abs" | "absolute" => Ok(Self::Absolute),
            other => Err(CoreError::Config(format!(
                "unknown negative policy '{other}' (expected reject, zero or abs)"
            ))),
        }
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    graph: Option<GraphSection>,
}

/// Graph section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct GraphSection {
    orientation: Option<Orientation>,
    separator: Option<String>,
    negative_policy: Option<NegativePolicy>,
    trailing_newline: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use bg_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<GraphConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = GraphConfig::default();

    let Some(g) = file.graph else {
        log::debug!("{}: no [graph] section, using defaults", path.display());
        return Ok(config);
    };
    if let Some(v) = g.orientation {
        config.orientation = v;
    }
    if let Some(v) = g.separator {
        config.separator = v;
    }
    if let Some(v) = g.negative_policy {
        config.negative_policy = v;
    }
    if let Some(v) = g.trailing_newline {
        config.trailing_newline = v;
    }

    Ok(config)
}
