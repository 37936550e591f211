/// Braille bar graph engine for braillegraph.
///
/// Packs integer magnitudes into Unicode Braille Pattern cells, either as
/// vertical graphs (4 bars per line, growing right) or horizontal graphs
/// (2 bars per column, growing up).

pub mod chunk;
pub mod compositor;
pub mod horizontal;
pub mod masks;
pub mod vertical;

use bg_core::Magnitude;
use bg_core::config::{GraphConfig, Orientation};
use bg_core::traits::GraphRenderer;

pub use horizontal::{HorizontalGraph, horizontal_graph};
pub use vertical::{VerticalGraph, vertical_graph};

/// Build the renderer selected by `config`.
///
/// # Example
/// ```
/// use bg_core::config::{GraphConfig, Orientation};
/// use bg_graph::renderer_for;
///
/// let config = GraphConfig { orientation: Orientation::Horizontal, ..GraphConfig::default() };
/// assert_eq!(renderer_for(&config).name(), "horizontal");
/// ```
#[must_use]
pub fn renderer_for(config: &GraphConfig) -> Box<dyn GraphRenderer> {
    match config.orientation {
        Orientation::Vertical => Box::new(VerticalGraph::new(config.separator.as_str())),
        Orientation::Horizontal => Box::new(HorizontalGraph),
    }
}

/// Render `magnitudes` with the orientation and separator of `config`.
///
/// # Example
/// ```
/// use bg_core::config::GraphConfig;
/// use bg_graph::render;
///
/// assert_eq!(render(&GraphConfig::default(), &[1, 2, 3, 4, 5, 6]), "⣷⣄\n⠛⠛⠓");
/// ```
#[must_use]
pub fn render(config: &GraphConfig, magnitudes: &[Magnitude]) -> String {
    renderer_for(config).render(magnitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_selects_the_renderer() {
        let mut config = GraphConfig {
            separator: " ".into(),
            ..GraphConfig::default()
        };
        let bars = [3, 1, 4, 1, 5, 9, 2, 6];
        assert_eq!(render(&config, &bars), "⡯⠥ ⣿⣛⣓⠒⠂");

        config.orientation = Orientation::Horizontal;
        // Le séparateur ne s'applique qu'au mode vertical.
        assert_eq!(render(&config, &bars), "⠀⠀⢀\n⠀⠀⣸⢠\n⣆⣇⣿⣼");
    }

    #[test]
    fn renderers_are_shareable_across_threads() {
        let renderer = renderer_for(&GraphConfig::default());
        std::thread::scope(|s| {
            let handles: Vec<_> = (1..=4u32)
                .map(|n| {
                    let renderer = &renderer;
                    s.spawn(move || renderer.render(&[n; 4]))
                })
                .collect();
            for (n, handle) in (1..=4u32).zip(handles) {
                assert_eq!(handle.join().unwrap(), vertical_graph(&[n; 4], "\n"));
            }
        });
    }
}
