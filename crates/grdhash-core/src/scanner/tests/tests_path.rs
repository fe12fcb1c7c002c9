//! Tests for path helpers

use crate::scanner::{dirname, join_segments, normalize_path, to_slash};
use rstest::rstest;

#[rstest]
#[case("pkg\\en\\greeting.xml", "pkg/en/greeting.xml")]
#[case("pkg/en/greeting.xml", "pkg/en/greeting.xml")]
#[case("mixed\\dir/file", "mixed/dir/file")]
fn test_to_slash(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_slash(input), expected);
}

#[rstest]
#[case("pkg/strings.grd", "pkg")]
#[case("a/b/c/strings.grd", "a/b/c")]
#[case("strings.grd", "")]
fn test_dirname(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(dirname(input), expected);
}

#[test]
fn test_join_segments_with_context() {
    assert_eq!(
        join_segments(["pkg", "en", "greeting.xml"]),
        "pkg/en/greeting.xml"
    );
}

#[test]
fn test_join_segments_drops_empty_directory() {
    assert_eq!(join_segments(["", "greeting.xml"]), "greeting.xml");
}

#[test]
fn test_join_segments_normalizes_backslashes_in_values() {
    assert_eq!(
        join_segments(["pkg", "default\\100_percent", "icon.png"]),
        "pkg/default/100_percent/icon.png"
    );
}

#[rstest]
#[case("pkg/./en/greeting.xml", "pkg/en/greeting.xml")]
#[case("pkg/sub/../en/greeting.xml", "pkg/en/greeting.xml")]
#[case("pkg//en///greeting.xml", "pkg/en/greeting.xml")]
#[case("pkg/../../shared/icon.png", "../shared/icon.png")]
#[case("../../x", "../../x")]
#[case("pkg/..", ".")]
#[case("", ".")]
#[case("/abs/../file", "/file")]
#[case("/../file", "/file")]
#[case("pkg\\sub\\..\\file", "pkg/file")]
fn test_normalize_path(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_path(input), expected);
}
