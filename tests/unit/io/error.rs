//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use rectcarve::io::error::{FigureError, fs_error, invalid_target};
    use std::error::Error;
    use std::path::Path;

    #[test]
    fn test_invalid_target_display_includes_path_and_reason() {
        let err = invalid_target(Path::new("figures"), &"not a figure file");
        let rendered = err.to_string();
        assert!(rendered.contains("figures"));
        assert!(rendered.contains("not a figure file"));
    }

    #[test]
    fn test_file_system_display_includes_operation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = fs_error(Path::new("a.txt"), "read figure", io_err);
        let rendered = err.to_string();
        assert!(rendered.contains("read figure"));
        assert!(rendered.contains("a.txt"));
    }

    #[test]
    fn test_only_file_system_errors_carry_a_source() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let with_source = fs_error(Path::new("a.txt"), "read figure", io_err);
        assert!(with_source.source().is_some());

        let without_source = invalid_target(Path::new("a.txt"), &"reason");
        assert!(without_source.source().is_none());
    }

    #[test]
    fn test_io_error_conversion_marks_path_unknown() {
        let io_err = std::io::Error::other("boom");
        let err = FigureError::from(io_err);
        assert!(err.to_string().contains("<unknown>"));
    }
}
