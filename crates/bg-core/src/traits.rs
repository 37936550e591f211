use crate::Magnitude;

/// Transforme une séquence de magnitudes en graphe Braille.
///
/// Implémenté par : `VerticalGraph`, `HorizontalGraph`.
///
/// CONTRAT : pure, sans état partagé entre deux appels. Une séquence vide
/// produit une chaîne vide.
///
/// # Example
/// ```
/// use bg_core::traits::GraphRenderer;
/// use bg_core::Magnitude;
///
/// struct Blank;
/// impl GraphRenderer for Blank {
///     fn render(&self, magnitudes: &[Magnitude]) -> String {
///         "\u{2800}".repeat(magnitudes.len())
///     }
///     fn name(&self) -> &'static str { "blank" }
/// }
/// assert_eq!(Blank.render(&[]), "");
/// ```
pub trait GraphRenderer: Send + Sync {
    /// Render the whole graph.
    fn render(&self, magnitudes: &[Magnitude]) -> String;

    /// Nom lisible pour les logs.
    fn name(&self) -> &'static str;
}
