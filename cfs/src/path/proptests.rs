//! Property-based tests for path handling.
//!
//! Note: The normalize and intersection modules already carry small property
//! suites. This module runs heavier cases across both styles.

use super::{Intersection, PathRelationship, PathStyle};
use proptest::prelude::*;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9_-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn separator_strategy(style: PathStyle) -> BoxedStrategy<String> {
    match style {
        PathStyle::Posix => prop_oneof![Just("/".to_string()), Just("//".to_string())].boxed(),
        PathStyle::Windows => prop_oneof![
            Just("\\".to_string()),
            Just("/".to_string()),
            Just("\\/".to_string()),
        ]
        .boxed(),
    }
}

fn root_strategy(style: PathStyle) -> BoxedStrategy<String> {
    match style {
        PathStyle::Posix => prop_oneof![Just(String::new()), Just("/".to_string())].boxed(),
        PathStyle::Windows => prop_oneof![
            Just(String::new()),
            Just("\\".to_string()),
            Just("C:\\".to_string()),
            Just("c:/".to_string()),
            Just("D:".to_string()),
            Just("\\\\srv\\share\\".to_string()),
            Just("\\\\?\\".to_string()),
        ]
        .boxed(),
    }
}

fn styled_path_strategy(style: PathStyle) -> impl Strategy<Value = String> {
    (
        root_strategy(style),
        prop::collection::vec(
            (path_component_strategy(), separator_strategy(style)),
            0..8,
        ),
    )
        .prop_map(|(root, parts)| {
            let mut path = root;
            for (i, (name, sep)) in parts.iter().enumerate() {
                if i > 0 {
                    path.push_str(sep);
                }
                path.push_str(name);
            }
            path
        })
}

fn style_and_path() -> impl Strategy<Value = (PathStyle, String)> {
    prop_oneof![
        styled_path_strategy(PathStyle::Posix).prop_map(|p| (PathStyle::Posix, p)),
        styled_path_strategy(PathStyle::Windows).prop_map(|p| (PathStyle::Windows, p)),
    ]
}

fn absolute_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9_-]{1,12}", 1..8).prop_map(|parts| format!("/{}", parts.join("/")))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn path_normalization_idempotent((style, path) in style_and_path()) {
        let once = style.normalize(&path);
        let twice = style.normalize(&once);
        prop_assert_eq!(once, twice);
    }

    // Normalization keeps the root and absoluteness
    #[test]
    fn path_normalization_preserves_absoluteness((style, path) in style_and_path()) {
        let normalized = style.normalize(&path);
        prop_assert_eq!(style.is_absolute(&normalized), style.is_absolute(&path));
        prop_assert_eq!(style.root_len(&normalized), style.root_len(&path));
    }

    // Forward and backward iteration visit the same segments
    #[test]
    fn path_segments_reverse((style, path) in style_and_path()) {
        let forward: Vec<_> = style.segments(&path).map(|s| s.as_str()).collect();
        let mut backward: Vec<_> = style.segments(&path).rev().map(|s| s.as_str()).collect();
        backward.reverse();
        prop_assert_eq!(&forward, &backward);
        for segment in forward {
            prop_assert!(!segment.is_empty());
            prop_assert!(!segment.bytes().any(|b| style.is_separator(b)));
        }
    }

    // Bounded output never overruns and always reports the full length
    #[test]
    fn path_bounded_output((style, path) in style_and_path(), size in 0usize..40) {
        let expected = style.normalize(&path);
        let mut buf = vec![0x55u8; size + 2];
        let needed = style.normalize_into(&path, &mut buf[..size]);
        prop_assert_eq!(needed, expected.len());
        prop_assert!(buf[size..].iter().all(|&b| b == 0x55));
        if size > 0 {
            let stored = needed.min(size - 1);
            prop_assert_eq!(&buf[..stored], &expected.as_bytes()[..stored]);
            prop_assert_eq!(buf[stored], 0);
        }
    }

    // A path shares its whole normalized form with itself
    #[test]
    fn path_intersection_reflexive((style, path) in style_and_path()) {
        prop_assert_eq!(
            style.intersection(&path, &path),
            Intersection::Common(style.normalized_len(&path))
        );
    }

    // Windows comparisons ignore case
    #[test]
    fn path_intersection_ignores_case_on_windows(path in styled_path_strategy(PathStyle::Windows)) {
        let upper = path.to_ascii_uppercase();
        prop_assert_eq!(
            PathStyle::Windows.intersection(&path, &upper).len(),
            PathStyle::Windows.normalized_len(&path)
        );
    }

    // Path relationship is reflexive: path is always identical to itself
    #[test]
    fn path_relationship_reflexive((style, path) in style_and_path()) {
        let rel = PathRelationship::between(style, &path, &path);
        prop_assert_eq!(rel, PathRelationship::Same);
    }

    // Containment is transitive (if A contains B and B contains C, then A contains C)
    #[test]
    fn path_containment_transitive(base in absolute_path_strategy(), parts1 in 1..5usize, parts2 in 1..5usize) {
        let style = PathStyle::Posix;
        let mut path_b = base.clone();
        for i in 0..parts1 {
            path_b.push_str(&format!("/sub{i}"));
        }

        let mut path_c = path_b.clone();
        for i in 0..parts2 {
            path_c.push_str(&format!("/deep{i}"));
        }

        prop_assert_eq!(PathRelationship::between(style, &base, &path_b), PathRelationship::Ancestor);
        prop_assert_eq!(PathRelationship::between(style, &path_b, &path_c), PathRelationship::Ancestor);
        prop_assert_eq!(PathRelationship::between(style, &base, &path_c), PathRelationship::Ancestor);
        prop_assert!(style.contains(&base, &path_c));
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric((style, path1) in style_and_path(), path2 in any::<prop::sample::Index>()) {
        // Pair each path with a prefix-derived sibling so hierarchies actually occur.
        let cut = path2.index(path1.len() + 1);
        let other = path1.get(..cut).unwrap_or(&path1).to_string();
        let rel_12 = PathRelationship::between(style, &path1, &other);
        let rel_21 = PathRelationship::between(style, &other, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // is_hierarchical is consistent with relationship type
    #[test]
    fn path_is_hierarchical_consistent(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel = PathRelationship::between(PathStyle::Posix, &path1, &path2);
        prop_assert_eq!(rel.is_hierarchical(), !matches!(rel, PathRelationship::Unrelated));
    }

    // Joining a directory with a relative name extends the directory
    #[test]
    fn path_join_descends(base in absolute_path_strategy(), name in "[a-z]{1,8}") {
        let style = PathStyle::Posix;
        let joined = style.join(&[&base, &name]);
        prop_assert_eq!(PathRelationship::between(style, &base, &joined), PathRelationship::Ancestor);
        prop_assert_eq!(style.basename(&joined), Some(name.as_str()));
    }
}
