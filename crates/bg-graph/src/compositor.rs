use bg_core::Magnitude;
use bg_core::config::Orientation;

/// Dot masks available to one slot of a cell group.
///
/// `full` raises every dot the slot owns in a cell. `partial[r - 1]` raises
/// the first `r` of them, for a bar whose length leaves a remainder `r`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotMasks {
    /// Mask of a fully covered cell.
    pub full: u8,
    /// Masks of a partially covered cell, indexed by `remainder - 1`.
    pub partial: &'static [u8],
}

/// Vertical graphs: one slot per dot row, top to bottom.
///
/// A full row raises both dots of the row, the partial (half) row only the
/// left one.
pub const VERTICAL_SLOTS: [SlotMasks; 4] = [
    SlotMasks { full: 0x09, partial: &[0x01] },
    SlotMasks { full: 0x12, partial: &[0x02] },
    SlotMasks { full: 0x24, partial: &[0x04] },
    SlotMasks { full: 0xC0, partial: &[0x40] },
];

/// Horizontal graphs: one slot per dot column, left then right.
///
/// Partial columns fill from the bottom dot upward.
pub const HORIZONTAL_SLOTS: [SlotMasks; 2] = [
    SlotMasks { full: 0x47, partial: &[0x40, 0x44, 0x46] },
    SlotMasks { full: 0xB8, partial: &[0x80, 0xA0, 0xB0] },
];

/// Slot table for an orientation.
#[must_use]
pub const fn slots(orientation: Orientation) -> &'static [SlotMasks] {
    match orientation {
        Orientation::Vertical => &VERTICAL_SLOTS,
        Orientation::Horizontal => &HORIZONTAL_SLOTS,
    }
}

/// Dots covered by one fully dotted cell along the bar's axis (2 or 4).
#[must_use]
pub const fn unit(orientation: Orientation) -> Magnitude {
    match orientation {
        Orientation::Vertical => 2,
        Orientation::Horizontal => 4,
    }
}

/// Number of bars packed side by side in one cell group (4 or 2).
#[must_use]
pub const fn group_size(orientation: Orientation) -> usize {
    slots(orientation).len()
}

/// Number of cells a bar of `magnitude` dots spans.
///
/// # Example
/// ```
/// use bg_core::config::Orientation;
/// use bg_graph::compositor::cells_needed;
/// assert_eq!(cells_needed(5, Orientation::Vertical), 3);
/// assert_eq!(cells_needed(5, Orientation::Horizontal), 2);
/// assert_eq!(cells_needed(0, Orientation::Horizontal), 0);
/// ```
#[must_use]
pub const fn cells_needed(magnitude: Magnitude, orientation: Orientation) -> usize {
    magnitude.div_ceil(unit(orientation)) as usize
}

/// Cell masks one bar contributes, counted from the bar's origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stroke {
    /// Cells `0..full_cells` all receive `full_mask`.
    pub full_cells: usize,
    /// Mask raised in each of the full cells.
    pub full_mask: u8,
    /// Mask of cell `full_cells`, if the bar ends inside it.
    pub tail_mask: Option<u8>,
}

impl Stroke {
    /// Total number of cells touched.
    #[must_use]
    pub fn cells(self) -> usize {
        self.full_cells + usize::from(self.tail_mask.is_some())
    }
}

/// Compute the stroke of a bar drawn in `slot`.
///
/// Returns `None` when `slot` is outside the orientation's group
/// (`0..4` vertical, `0..2` horizontal).
///
/// # Example
/// ```
/// use bg_core::config::Orientation;
/// use bg_graph::compositor::compose;
///
/// let s = compose(5, 1, Orientation::Vertical).unwrap();
/// assert_eq!((s.full_cells, s.full_mask, s.tail_mask), (2, 0x12, Some(0x02)));
///
/// let s = compose(7, 0, Orientation::Horizontal).unwrap();
/// assert_eq!((s.full_cells, s.full_mask, s.tail_mask), (1, 0x47, Some(0x46)));
///
/// assert!(compose(1, 2, Orientation::Horizontal).is_none());
/// ```
#[must_use]
pub fn compose(magnitude: Magnitude, slot: usize, orientation: Orientation) -> Option<Stroke> {
    let masks = slots(orientation).get(slot)?;
    let unit = unit(orientation);
    let remainder = magnitude % unit;
    Some(Stroke {
        full_cells: (magnitude / unit) as usize,
        full_mask: masks.full,
        tail_mask: (remainder != 0).then(|| masks.partial[remainder as usize - 1]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    #[test]
    fn tables_match_group_geometry() {
        for o in BOTH {
            for masks in slots(o) {
                assert_eq!(masks.partial.len() as Magnitude, unit(o) - 1);
                assert_eq!(masks.full.count_ones(), unit(o));
                // Chaque masque partiel est inclus dans le masque plein.
                for &p in masks.partial {
                    assert_eq!(p & masks.full, p);
                }
            }
        }
        assert_eq!(group_size(Orientation::Vertical), 4);
        assert_eq!(group_size(Orientation::Horizontal), 2);
    }

    #[test]
    fn slots_never_share_dots() {
        for o in BOTH {
            let all = slots(o).iter().fold(0u8, |acc, m| {
                assert_eq!(acc & m.full, 0);
                acc | m.full
            });
            assert_eq!(all, 0xFF);
        }
    }

    #[test]
    fn partial_columns_grow_from_the_bottom() {
        for masks in HORIZONTAL_SLOTS {
            for pair in masks.partial.windows(2) {
                assert_eq!(pair[0] & pair[1], pair[0]);
                assert_eq!(pair[1].count_ones(), pair[0].count_ones() + 1);
            }
        }
        assert_eq!(HORIZONTAL_SLOTS[0].partial[0], 0x40);
        assert_eq!(HORIZONTAL_SLOTS[1].partial[0], 0x80);
    }

    #[test]
    fn cell_count_matches_stroke() {
        for o in BOTH {
            for v in 0..40 {
                for slot in 0..group_size(o) {
                    let stroke = compose(v, slot, o).unwrap();
                    assert_eq!(stroke.cells(), cells_needed(v, o));
                    let expected = (v / unit(o)) as usize + usize::from(v % unit(o) != 0);
                    assert_eq!(stroke.cells(), expected);
                }
            }
        }
    }

    #[test]
    fn zero_is_empty() {
        let s = compose(0, 3, Orientation::Vertical).unwrap();
        assert_eq!(s.cells(), 0);
        assert_eq!((s.full_cells, s.tail_mask), (0, None));
    }

    #[test]
    fn adding_a_unit_adds_one_full_cell() {
        for o in BOTH {
            for v in 0..20 {
                let a = compose(v, 0, o).unwrap();
                let b = compose(v + unit(o), 0, o).unwrap();
                assert_eq!(b.full_cells, a.full_cells + 1);
                assert_eq!(b.tail_mask, a.tail_mask);
            }
        }
    }

    #[test]
    fn odd_vertical_bar_ends_with_a_half_row() {
        let s = compose(3, 2, Orientation::Vertical).unwrap();
        assert_eq!(s, Stroke { full_cells: 1, full_mask: 0x24, tail_mask: Some(0x04) });
    }

    #[test]
    fn out_of_range_slot() {
        assert!(compose(1, 4, Orientation::Vertical).is_none());
        assert!(compose(1, 2, Orientation::Horizontal).is_none());
    }
}
