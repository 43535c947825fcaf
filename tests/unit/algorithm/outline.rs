//! Tests for the border validation predicate

#[cfg(test)]
mod tests {
    use rectcarve::algorithm::outline::is_outline;
    use rectcarve::spatial::{CharGrid, RectSpan};

    #[test]
    fn test_clean_outline_validates() {
        let grid = CharGrid::from_figure("+---+\n|   |\n|   |\n+---+\n");
        let span = RectSpan::new([0, 0], [3, 4]);
        assert!(is_outline(&grid, &span));
    }

    #[test]
    fn test_minimal_two_by_two_validates() {
        let grid = CharGrid::from_figure("++\n++\n");
        let span = RectSpan::new([0, 0], [1, 1]);
        assert!(is_outline(&grid, &span));
    }

    #[test]
    fn test_missing_corner_fails() {
        let grid = CharGrid::from_figure("+---+\n|   |\n|   |\n+--- \n");
        let span = RectSpan::new([0, 0], [3, 4]);
        assert!(!is_outline(&grid, &span));
    }

    #[test]
    fn test_corner_marker_inside_interior_fails() {
        let grid = CharGrid::from_figure("+---+\n| + |\n+---+\n");
        let span = RectSpan::new([0, 0], [2, 4]);
        assert!(!is_outline(&grid, &span));
    }

    #[test]
    fn test_broken_side_wall_fails() {
        let grid = CharGrid::from_figure("+---+\n|    \n+---+\n");
        let span = RectSpan::new([0, 0], [2, 4]);
        assert!(!is_outline(&grid, &span));
    }

    // Only the corner columns are enforced on horizontal border rows;
    // junction markers between them are accepted.
    #[test]
    fn test_non_corner_cells_on_horizontal_edges_are_not_enforced() {
        let grid = CharGrid::from_figure("+-+-+\n|   |\n+---+\n");
        let span = RectSpan::new([0, 0], [2, 4]);
        assert!(is_outline(&grid, &span));
    }

    #[test]
    fn test_sub_span_of_larger_figure_validates_independently() {
        let grid = CharGrid::from_figure("+--+--+\n|  |  |\n+--+--+\n");
        assert!(is_outline(&grid, &RectSpan::new([0, 0], [2, 3])));
        assert!(is_outline(&grid, &RectSpan::new([0, 3], [2, 6])));
        // The enclosing span also validates (the junction column holds no
        // corner markers); the scan never reaches it because the nearest
        // candidates win first.
        assert!(is_outline(&grid, &RectSpan::new([0, 0], [2, 6])));
    }
}
