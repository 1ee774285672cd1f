//! Greedy par computation.
//!
//! Par is the move count a perfectly greedy, non-backtracking player needs:
//! at every step, each palette color is tried hypothetically and the one
//! absorbing the most cells wins. This is a one-step lookahead, not an optimal
//! solver; it defines the difficulty baseline, nothing more.

use crate::*;

/// One greedy lookahead step: recolors `region` to each palette color on a
/// private working copy, regrows from the anchor, and returns the color whose
/// candidate region is strictly largest. Ties resolve to the earliest palette
/// entry. `None` only for an empty palette.
pub fn best_flood(
    board: &ColorBoard,
    region: &Region,
    palette: &[Color],
) -> Option<(Color, Region)> {
    let mut trial = board.clone();
    let mut best: Option<(Color, Region)> = None;

    for &color in palette {
        // Only the region cells change per trial; cells absorbed in an
        // earlier trial already carried that trial's color and are untouched.
        for coords in region.iter() {
            trial[coords] = color;
        }
        let candidate = Region::grow(&trial, region.anchor(), color);

        let larger = best
            .as_ref()
            .is_none_or(|(_, largest)| candidate.cell_count() > largest.cell_count());
        if larger {
            best = Some((color, candidate));
        }
    }

    best
}

/// Number of greedy floods needed to unify `board` starting from `region`.
///
/// Runs entirely on private copies; the caller's board and region are never
/// mutated. A board already unified by its starting region costs 0 moves.
pub fn greedy_par(board: &ColorBoard, region: &Region, colors: ColorCount) -> MoveCount {
    let palette = Color::palette(colors);
    let total = board.total_cells();
    let mut board = board.clone();
    let mut region = region.clone();
    let mut steps = 0;

    while !region.covers(total) {
        let Some((color, grown)) = best_flood(&board, &region, palette) else {
            break;
        };
        if grown.cell_count() <= region.cell_count() {
            // Only reachable when the board holds colors outside the active
            // palette; bail out instead of sweeping forever.
            log::warn!(
                "greedy flood stalled at {} of {} cells",
                region.cell_count(),
                total
            );
            break;
        }

        for coords in grown.iter() {
            board[coords] = color;
        }
        region = grown;
        steps += 1;
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: &[&str]) -> ColorBoard {
        ColorBoard::parse(rows).unwrap()
    }

    fn anchored(board: &ColorBoard) -> Region {
        Region::grow(board, (0, 0), board[(0, 0)])
    }

    #[test]
    fn uniform_board_needs_no_moves() {
        let board = ColorBoard::filled((4, 4), Color::Blue);
        let region = anchored(&board);
        assert_eq!(greedy_par(&board, &region, 4), 0);
    }

    #[test]
    fn two_by_two_board_floods_in_one_move() {
        // Flooding Black from the lone White anchor absorbs the other three
        // cells at once.
        let board = board(&["WK", "KK"]);
        let region = anchored(&board);
        assert_eq!(region.cell_count(), 1);
        assert_eq!(greedy_par(&board, &region, 2), 1);
    }

    #[test]
    fn three_cell_strip_floods_in_two_moves() {
        // W K W: Black joins the middle cell, then White the far end.
        let board = board(&["WKW"]);
        let region = anchored(&board);
        assert_eq!(greedy_par(&board, &region, 2), 2);
    }

    #[test]
    fn best_flood_reports_the_largest_growth() {
        // Black absorbs two cells, Red only one.
        let board = board(&["WKK", "RWW"]);
        let region = anchored(&board);

        let (color, grown) = best_flood(&board, &region, Color::palette(3)).unwrap();
        assert_eq!(color, Color::Black);
        assert_eq!(grown.cell_count(), 3);
    }

    #[test]
    fn ties_resolve_to_the_earliest_palette_color() {
        // White and Red each grow the region to two cells; White enumerates
        // first and must win.
        let board = board(&["KW", "RK"]);
        let region = anchored(&board);

        let (color, grown) = best_flood(&board, &region, Color::palette(3)).unwrap();
        assert_eq!(color, Color::White);
        assert_eq!(grown.cell_count(), 2);
        assert!(grown.contains((0, 1)));
    }

    #[test]
    fn checkerboard_runs_to_completion() {
        let board = board(&["WKW", "KWK", "WKW"]);
        let region = anchored(&board);
        assert_eq!(greedy_par(&board, &region, 2), 4);
    }

    #[test]
    fn stalled_sweep_returns_instead_of_looping() {
        // Magenta sits outside the two-color palette, so nothing can grow.
        let board = board(&["WM"]);
        let region = anchored(&board);
        assert_eq!(greedy_par(&board, &region, 2), 0);
    }

    #[test]
    fn estimator_leaves_the_live_state_untouched() {
        let board = board(&["WKW", "KKW"]);
        let region = anchored(&board);
        let board_before = board.clone();
        let region_before = region.clone();

        let par = greedy_par(&board, &region, 2);
        assert!(par > 0);
        assert_eq!(board, board_before);
        assert_eq!(region, region_before);
    }

    #[test]
    fn empty_palette_yields_no_candidate() {
        let board = board(&["WK"]);
        let region = anchored(&board);
        assert!(best_flood(&board, &region, &[]).is_none());
    }
}
