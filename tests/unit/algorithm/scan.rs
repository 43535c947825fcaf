//! Tests for nearest-first corner scanning and anchor resolution

#[cfg(test)]
mod tests {
    use rectcarve::algorithm::scan::{anchored_span, corners_below, corners_right};
    use rectcarve::spatial::{CharGrid, RectSpan};

    #[test]
    fn test_corners_below_are_nearest_first() {
        let grid = CharGrid::from_figure("+\n|\n+\n+\n");
        let found: Vec<usize> = corners_below(&grid, 0, 0).collect();
        assert_eq!(found, vec![2, 3]);
    }

    #[test]
    fn test_corners_below_ignore_other_columns() {
        let grid = CharGrid::from_figure("+ \n +\n+ \n");
        let found: Vec<usize> = corners_below(&grid, 0, 0).collect();
        assert_eq!(found, vec![2]);
    }

    #[test]
    fn test_corners_right_are_nearest_first() {
        let grid = CharGrid::from_figure("+-+-+\n");
        let found: Vec<usize> = corners_right(&grid, 0, 0).collect();
        assert_eq!(found, vec![2, 4]);
    }

    #[test]
    fn test_anchor_prefers_the_minimal_rectangle() {
        // Both [0,0]-[2,2] and [0,0]-[2,4] close; the nearer corners win
        let grid = CharGrid::from_figure("+-+-+\n| | |\n+-+-+\n");
        let span = anchored_span(&grid, 0, 0);
        assert_eq!(span, Some(RectSpan::new([0, 0], [2, 2])));
    }

    #[test]
    fn test_anchor_skips_candidates_that_do_not_close() {
        // The corner at column 2 has no partner on the bottom row, so the
        // walk moves on to column 4
        let grid = CharGrid::from_figure("+-+-+\n|   |\n+---+\n");
        let span = anchored_span(&grid, 0, 0);
        assert_eq!(span, Some(RectSpan::new([0, 0], [2, 4])));
    }

    #[test]
    fn test_anchor_skips_spans_that_fail_validation() {
        // [0,0]-[3,3] closes at all four corners but a stray marker sits
        // inside, so the anchor falls through to the outer span
        let figure = concat!(
            "+--+-+\n",
            "|+ | |\n",
            "|  | |\n",
            "+--+-+\n",
        );
        let grid = CharGrid::from_figure(figure);
        assert_eq!(anchored_span(&grid, 0, 0), None);
        assert_eq!(
            anchored_span(&grid, 0, 3),
            Some(RectSpan::new([0, 3], [3, 5]))
        );
    }

    #[test]
    fn test_anchor_without_closing_corners_yields_nothing() {
        let grid = CharGrid::from_figure("+--\n|  \n   \n");
        assert_eq!(anchored_span(&grid, 0, 0), None);
    }
}
