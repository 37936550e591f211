use std::fmt::{self, Write as _};
use std::num::NonZeroUsize;

use bg_core::Magnitude;
use bg_core::config::Orientation;
use bg_core::traits::GraphRenderer;

use crate::chunk::chunk;
use crate::compositor::{compose, group_size};
use crate::masks::BrailleCell;

const GROUP: NonZeroUsize = match NonZeroUsize::new(group_size(Orientation::Horizontal)) {
    Some(n) => n,
    None => panic!("empty horizontal slot table"),
};

/// Draw one group of up to two bars as a column of cells.
///
/// The column is indexed bottom to top: index 0 is the baseline cell.
/// Bar 0 uses the left dot column, bar 1 the right one. Bars past the
/// second are ignored.
///
/// # Example
/// ```
/// use bg_graph::horizontal::render_column;
/// let column = render_column(&[5, 6]);
/// let chars: Vec<char> = column.iter().map(|c| c.to_char()).collect();
/// assert_eq!(chars, vec!['⣿', '⣠']);
/// ```
#[must_use]
pub fn render_column(group: &[Magnitude]) -> Vec<BrailleCell> {
    let mut column: Vec<BrailleCell> = Vec::new();

    for (slot, &value) in group.iter().enumerate() {
        let Some(stroke) = compose(value, slot, Orientation::Horizontal) else {
            break;
        };

        // Bottom-up indexing: growing the Vec adds cells on top.
        if stroke.cells() > column.len() {
            column.resize(stroke.cells(), BrailleCell::BLANK);
        }

        for cell in &mut column[..stroke.full_cells] {
            cell.raise(stroke.full_mask);
        }
        if let Some(mask) = stroke.tail_mask {
            column[stroke.full_cells].raise(mask);
        }
    }

    column
}

/// Grille de cellules, rangées de haut en bas, alignées sur la dernière
/// rangée (la ligne de base commune à toutes les barres).
///
/// Internally every row is `width` cells wide. When displayed, each row
/// stops at its last raised cell: trailing blanks are dropped, leading and
/// interior blanks are kept so columns stay aligned.
///
/// # Example
/// ```
/// use bg_graph::horizontal::{Matrix, render_column};
///
/// let mut matrix = Matrix::default();
/// matrix.push_column(&render_column(&[1, 2]));
/// matrix.push_column(&render_column(&[5, 6]));
/// assert_eq!((matrix.width(), matrix.height()), (2, 2));
/// assert_eq!(matrix.to_string(), "⠀⣠\n⣠⣿");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matrix {
    rows: Vec<Vec<BrailleCell>>,
    width: usize,
}

impl Matrix {
    /// Number of columns pushed so far, empty ones included.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, i.e. cells spanned by the tallest column.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Rows, top to bottom.
    #[must_use]
    pub fn rows(&self) -> &[Vec<BrailleCell>] {
        &self.rows
    }

    /// Append a bottom-up column on the right, keeping every column on the
    /// shared baseline.
    ///
    /// A column taller than the grid adds blank rows on top of it. A shorter
    /// column is padded with blank cells on its top.
    pub fn push_column(&mut self, column: &[BrailleCell]) {
        if column.len() > self.rows.len() {
            let extra = column.len() - self.rows.len();
            let blank_row = vec![BrailleCell::BLANK; self.width];
            self.rows.splice(0..0, std::iter::repeat_n(blank_row, extra));
        }

        let height = self.rows.len();
        for (top_index, row) in self.rows.iter_mut().enumerate() {
            let bottom_index = height - 1 - top_index;
            row.push(column.get(bottom_index).copied().unwrap_or(BrailleCell::BLANK));
        }
        self.width += 1;
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            let end = row
                .iter()
                .rposition(|&cell| cell != BrailleCell::BLANK)
                .map_or(0, |last| last + 1);
            for cell in &row[..end] {
                f.write_char(cell.to_char())?;
            }
        }
        Ok(())
    }
}

/// Horizontal bar graph: bars grow upward, two bars per column of cells.
///
/// # Example
/// ```
/// use bg_core::traits::GraphRenderer;
/// use bg_graph::horizontal::HorizontalGraph;
///
/// assert_eq!(
///     HorizontalGraph.render(&[3, 1, 4, 1, 5, 9, 2, 6]),
///     "⠀⠀⢀\n⠀⠀⣸⢠\n⣆⣇⣿⣼",
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HorizontalGraph;

impl GraphRenderer for HorizontalGraph {
    fn render(&self, magnitudes: &[Magnitude]) -> String {
        let mut matrix = Matrix::default();
        for group in chunk(magnitudes.iter().copied(), GROUP) {
            let column = render_column(&group);
            log::trace!("horizontal: group {:?} -> {} cells", group, column.len());
            matrix.push_column(&column);
        }
        log::debug!(
            "horizontal: {} bars, {}x{} cells",
            magnitudes.len(),
            matrix.width(),
            matrix.height()
        );
        matrix.to_string()
    }

    fn name(&self) -> &'static str {
        "horizontal"
    }
}

/// Render a horizontal graph, rows joined by newlines.
///
/// # Example
/// ```
/// use bg_graph::horizontal_graph;
/// assert_eq!(horizontal_graph(&[1, 2, 3, 4]), "⣠⣾");
/// assert_eq!(horizontal_graph(&[]), "");
/// ```
#[must_use]
pub fn horizontal_graph(magnitudes: &[Magnitude]) -> String {
    HorizontalGraph.render(magnitudes)
}
