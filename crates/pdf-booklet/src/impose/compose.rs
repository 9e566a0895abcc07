//! Order composition
//!
//! Maps the pages of one signature onto physical print slots.
//!
//! Every style is built from the classic 2-up saddle-stitch *pair*: for an
//! `n`-page signature, pair `k` holds the two pages that share one half of a
//! folded sheet side.
//!
//! ```text
//! n = 8 (1-based pages)      pair 0: 8 1   pair 1: 2 7   pair 2: 6 3   pair 3: 4 5
//! ```
//!
//! Each (style, n-up) rule places pairs into the rows of a sheet's front and
//! back face. Two transforms follow: short-edge binding turns the back face
//! 180°, and top-fold booklets read the face grid column by column.

use crate::config::ImpositionConfig;
use crate::layout::{FaceGrid, PageSlot, SheetSide, Signature, sheet_capacity};
use crate::types::{BindingEdge, BookletStyle, NUp};

/// Page positions (0-based within the signature) on both faces of a sheet
#[derive(Debug, Clone, PartialEq, Eq)]
struct SheetFaces {
    /// Grid the faces are printed on
    grid: FaceGrid,
    front: Vec<usize>,
    back: Vec<usize>,
}

/// Saddle-stitch pair `k` of an `n`-page signature, left page first.
///
/// Even pairs lie on a front face with the higher page on the left; odd pairs
/// lie on a back face with the lower page on the left.
fn pair(k: usize, n: usize) -> [usize; 2] {
    if k % 2 == 0 {
        [n - 1 - k, k]
    } else {
        [k, n - 1 - k]
    }
}

fn turned([left, right]: [usize; 2]) -> [usize; 2] {
    [right, left]
}

/// Compose one signature into print slots, sheet by sheet, front before back.
pub fn compose(signature: &Signature, config: &ImpositionConfig) -> Vec<PageSlot> {
    let n = signature.len();
    let sheets = signature.sheet_count(sheet_capacity(config.nup));
    let mut slots = Vec::with_capacity(n);

    for sheet in 0..sheets {
        let faces = sheet_faces(config, sheet, n);
        for (face, positions) in [(SheetSide::Front, faces.front), (SheetSide::Back, faces.back)] {
            slots.extend(positions.into_iter().enumerate().map(|(cell, position)| PageSlot {
                source: signature.pages[position],
                signature_index: signature.index,
                sheet_index: sheet,
                face,
                grid_pos: faces.grid.position(cell),
            }));
        }
    }

    log::trace!(
        "composed signature {} ({} pages, {} sheets)",
        signature.index,
        n,
        sheets
    );
    slots
}

/// Both faces of sheet `sheet` in an `n`-page signature, as printed
fn sheet_faces(config: &ImpositionConfig, sheet: usize, n: usize) -> SheetFaces {
    let grid = FaceGrid::for_config(config);
    let (front, mut back) = match (config.style, config.nup) {
        (BookletStyle::PerfectBound, _) => perfect_bound_faces(grid, sheet),
        (BookletStyle::Advanced, _) => advanced_faces(sheet, n),
        (_, NUp::Eight) => saddle_eight_up_faces(sheet, n),
        (_, nup) => saddle_faces(nup, sheet, n),
    };

    // Flipping on the short edge turns the back face upside down
    if config.binding == BindingEdge::Short {
        back.reverse();
    }

    if config.style == BookletStyle::SimpleTopfold {
        return SheetFaces {
            grid: grid.transposed(),
            front: grid.transpose(&front),
            back: grid.transpose(&back),
        };
    }

    SheetFaces { grid, front, back }
}

/// 2-, 4- and 6-up saddle stitch: one pair per row, pairs taken in order and
/// alternating between front and back faces.
fn saddle_faces(nup: NUp, sheet: usize, n: usize) -> (Vec<usize>, Vec<usize>) {
    let cells = nup.count();
    let first = cells * sheet;
    let face = |side: usize| -> Vec<usize> {
        (0..cells / 2)
            .flat_map(|row| {
                let cell_pair = pair(first + 2 * row + side, n);
                // The lower row of a 4-up sheet is printed head-down
                if nup == NUp::Four && row == 1 {
                    turned(cell_pair)
                } else {
                    cell_pair
                }
            })
            .collect()
    };
    (face(0), face(1))
}

/// 8-up saddle stitch: each 2x4 row interleaves two pairs so the second fold
/// brings the halves of both pairs together.
fn saddle_eight_up_faces(sheet: usize, n: usize) -> (Vec<usize>, Vec<usize>) {
    let mut front = Vec::with_capacity(8);
    let mut back = Vec::with_capacity(8);
    for row in 0..2 {
        let k = 8 * sheet + 4 * row;

        let [outer_left, outer_right] = pair(k, n);
        let [inner_left, inner_right] = pair(k + 2, n);
        front.extend([outer_right, inner_left, outer_left, inner_right]);

        let [outer_left, outer_right] = pair(k + 1, n);
        let [inner_left, inner_right] = pair(k + 3, n);
        back.extend([inner_right, outer_left, inner_left, outer_right]);
    }
    (front, back)
}

/// Advanced 4-up: the upper halves of all sheets carry the outer pairs, the
/// lower halves carry the middle of the booklet. After one cut the lower stack
/// is nested inside the upper one.
fn advanced_faces(sheet: usize, n: usize) -> (Vec<usize>, Vec<usize>) {
    let middle = n / 2;
    let front = pair(2 * sheet, n)
        .into_iter()
        .chain(turned(pair(middle - 1 - 2 * sheet, n)))
        .collect();
    let back = pair(2 * sheet + 1, n)
        .into_iter()
        .chain(turned(pair(middle - 2 - 2 * sheet, n)))
        .collect();
    (front, back)
}

/// Perfect bound: every cell holds one leaf. The front shows the leaf's odd
/// page, the back shows its even page behind it, mirrored across the sheet.
fn perfect_bound_faces(grid: FaceGrid, sheet: usize) -> (Vec<usize>, Vec<usize>) {
    let first = sheet * 2 * grid.cell_count();
    let leaf = |row: usize, col: usize| first + 2 * (row * grid.cols + col);

    let mut front = Vec::with_capacity(grid.cell_count());
    let mut back = Vec::with_capacity(grid.cell_count());
    for row in 0..grid.rows {
        for col in 0..grid.cols {
            front.push(leaf(row, col));
            back.push(leaf(row, grid.cols - 1 - col) + 1);
        }
    }
    (front, back)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::resolve;
    use crate::layout::{GridPosition, SlotSource};

    fn signature(count: u32) -> Signature {
        Signature {
            index: 0,
            pages: (1..=count).map(SlotSource::Page).collect(),
        }
    }

    fn order(nup: usize, descriptor: &str, count: u32) -> Vec<u32> {
        let config = resolve(nup, descriptor, None).unwrap();
        compose(&signature(count), &config)
            .iter()
            .map(|slot| slot.page().unwrap())
            .collect()
    }

    #[test]
    fn test_pairs() {
        assert_eq!(pair(0, 8), [7, 0]);
        assert_eq!(pair(1, 8), [1, 6]);
        assert_eq!(pair(2, 8), [5, 2]);
        assert_eq!(pair(3, 8), [3, 4]);
    }

    #[test]
    fn test_two_up_booklet() {
        assert_eq!(
            order(2, "papersize:A4L", 8),
            vec![8, 1, 2, 7, 6, 3, 4, 5]
        );
    }

    #[test]
    fn test_two_up_short_edge_turns_back() {
        assert_eq!(order(2, "papersize:A4, binding:long", 4), vec![4, 1, 2, 3]);
        assert_eq!(order(2, "papersize:A4L, binding:short", 4), vec![4, 1, 3, 2]);
        // Portrait + short is a top fold; a single row reads the same transposed
        assert_eq!(order(2, "papersize:A4, binding:short", 4), vec![4, 1, 3, 2]);
    }

    #[test]
    fn test_advanced_multisheet_nests_lower_stack() {
        assert_eq!(
            order(4, "btype:bookletadvanced", 16),
            vec![16, 1, 9, 8, 2, 15, 7, 10, 14, 3, 11, 6, 4, 13, 5, 12]
        );
    }

    #[test]
    fn test_topfold_grid_positions_are_transposed() {
        let config = resolve(2, "papersize:A5, binding:short", None).unwrap();
        let slots = compose(&signature(4), &config);
        assert_eq!(slots[0].grid_pos, GridPosition::new(0, 0));
        assert_eq!(slots[1].grid_pos, GridPosition::new(1, 0));
    }

    #[test]
    fn test_slot_metadata() {
        let config = resolve(4, "btype:booklet", None).unwrap();
        let slots = compose(&signature(16), &config);
        assert_eq!(slots.len(), 16);
        assert_eq!(slots[0].sheet_index, 0);
        assert_eq!(slots[0].face, SheetSide::Front);
        assert_eq!(slots[4].face, SheetSide::Back);
        assert_eq!(slots[3].grid_pos, GridPosition::new(1, 1));
        assert_eq!(slots[8].sheet_index, 1);
        assert_eq!(slots[8].face, SheetSide::Front);
    }

    #[test]
    fn test_every_position_used_once() {
        let cases = [
            (2, "btype:booklet", 12),
            (4, "btype:booklet", 24),
            (4, "btype:booklet, binding:short", 24),
            (4, "btype:bookletadvanced", 32),
            (6, "btype:booklet", 36),
            (8, "btype:booklet", 48),
            (2, "btype:perfectbound", 4),
            (4, "btype:perfectbound", 8),
            (8, "btype:perfectbound", 16),
        ];
        for (nup, descriptor, count) in cases {
            let mut pages = order(nup, descriptor, count);
            pages.sort_unstable();
            assert_eq!(pages, (1..=count).collect::<Vec<_>>(), "{nup}-up {descriptor}");
        }
    }
}
