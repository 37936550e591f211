use std::num::NonZeroUsize;

use bg_core::Magnitude;
use bg_core::config::Orientation;
use bg_core::traits::GraphRenderer;

use crate::chunk::chunk;
use crate::compositor::{compose, group_size};
use crate::masks::BrailleCell;

const GROUP: NonZeroUsize = match NonZeroUsize::new(group_size(Orientation::Vertical)) {
    Some(n) => n,
    None => panic!("empty vertical slot table"),
};

/// Draw one group of up to four bars as a single line of cells.
///
/// Bar `i` of the group lives on dot row `i`, starting at the left edge of
/// the line. Bars past the fourth are ignored.
///
/// # Example
/// ```
/// use bg_graph::vertical::render_line;
/// assert_eq!(render_line(&[1, 2, 3, 4]), "⣷⣄");
/// assert_eq!(render_line(&[0, 0]), "");
/// ```
#[must_use]
pub fn render_line(group: &[Magnitude]) -> String {
    let mut line: Vec<BrailleCell> = Vec::new();

    for (slot, &value) in group.iter().enumerate() {
        let Some(stroke) = compose(value, slot, Orientation::Vertical) else {
            break;
        };

        // La ligne s'allonge vers la droite.
        if stroke.cells() > line.len() {
            line.resize(stroke.cells(), BrailleCell::BLANK);
        }

        for cell in &mut line[..stroke.full_cells] {
            cell.raise(stroke.full_mask);
        }
        if let Some(mask) = stroke.tail_mask {
            line[stroke.full_cells].raise(mask);
        }
    }

    line.into_iter().map(BrailleCell::to_char).collect()
}

/// Vertical bar graph: groups of four bars, one line per group.
///
/// # Example
/// ```
/// use bg_core::traits::GraphRenderer;
/// use bg_graph::vertical::VerticalGraph;
///
/// let graph = VerticalGraph::new(" ");
/// assert_eq!(graph.render(&[3, 1, 4, 1, 5, 9, 2, 6]), "⡯⠥ ⣿⣛⣓⠒⠂");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerticalGraph {
    separator: String,
}

impl VerticalGraph {
    /// Create a renderer joining lines with `separator`.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for VerticalGraph {
    fn default() -> Self {
        Self::new("\n")
    }
}

impl GraphRenderer for VerticalGraph {
    fn render(&self, magnitudes: &[Magnitude]) -> String {
        let lines: Vec<String> = chunk(magnitudes.iter().copied(), GROUP)
            .map(|group| render_line(&group))
            .collect();
        log::debug!("vertical: {} bars, {} lines", magnitudes.len(), lines.len());
        lines.join(&self.separator)
    }

    fn name(&self) -> &'static str {
        "vertical"
    }
}

/// Render a vertical graph, lines joined by `separator`.
///
/// # Example
/// ```
/// use bg_graph::vertical_graph;
/// assert_eq!(vertical_graph(&[1, 2, 3, 4, 5, 6], "\n"), "⣷⣄\n⠛⠛⠓");
/// assert_eq!(vertical_graph(&[], "\n"), "");
/// ```
#[must_use]
pub fn vertical_graph(magnitudes: &[Magnitude], separator: &str) -> String {
    VerticalGraph::new(separator).render(magnitudes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_empty() {
        assert_eq!(vertical_graph(&[], "\n"), "");
        assert_eq!(VerticalGraph::default().render(&[]), "");
    }

    #[test]
    fn one_group() {
        assert_eq!(vertical_graph(&[1, 2, 3, 4], "\n"), "⣷⣄");
    }

    #[test]
    fn two_groups_default_separator() {
        assert_eq!(
            VerticalGraph::default().render(&[1, 2, 3, 4, 5, 6]),
            "⣷⣄\n⠛⠛⠓"
        );
    }

    #[test]
    fn custom_separator() {
        assert_eq!(vertical_graph(&[3, 1, 4, 1, 5, 9, 2, 6], " "), "⡯⠥ ⣿⣛⣓⠒⠂");
    }

    #[test]
    fn pi_digits_one_per_line() {
        assert_eq!(vertical_graph(&[3, 1, 4, 1], "\n"), "⡯⠥");
    }

    #[test]
    fn zero_bars_leave_blank_cells() {
        // The short bar in the middle must not shrink the line.
        assert_eq!(render_line(&[4, 0, 0]), "⠉⠉");
        assert_eq!(render_line(&[0, 0, 0, 1]), "⡀");
    }

    #[test]
    fn single_bar_half_row() {
        assert_eq!(render_line(&[1]), "⠁");
        assert_eq!(render_line(&[2]), "⠉");
    }

    #[test]
    fn extra_bars_are_ignored() {
        assert_eq!(render_line(&[1, 2, 3, 4, 8]), render_line(&[1, 2, 3, 4]));
    }

    #[test]
    fn one_segment_per_group() {
        for count in 0..17u32 {
            let bars: Vec<Magnitude> = (1..=count).collect();
            let out = vertical_graph(&bars, "|");
            let segments = if out.is_empty() { 0 } else { out.split('|').count() };
            assert_eq!(segments, (count as usize).div_ceil(4), "count = {count}");
        }
    }

    #[test]
    fn growing_a_bar_keeps_its_neighbours() {
        let base = [3, 1, 4, 1];
        let grown = [3, 1 + 2, 4, 1];
        let a: Vec<char> = render_line(&base).chars().collect();
        let b: Vec<char> = render_line(&grown).chars().collect();
        assert_eq!(a.len(), b.len());
        let diff: Vec<u32> = a
            .iter()
            .zip(&b)
            .map(|(x, y)| *x as u32 ^ *y as u32)
            .collect();
        // Slot 1 (dots 0x12) : la demi-rangée devient pleine, une nouvelle
        // demi-rangée apparaît juste après.
        assert_eq!(diff, vec![0x10, 0x02]);
        assert!(diff.iter().all(|d| d & !0x12 == 0));
    }
}
