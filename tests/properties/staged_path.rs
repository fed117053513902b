//! Property tests for staging path resolution.

use std::path::{Component, PathBuf};

use proptest::prelude::*;

use ringside::domain::value_objects::StagedPath;

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_][A-Za-z0-9_.-]{0,11}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn relative() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 1..=5).prop_map(|parts| parts.iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a descendant lands at destination + its relative path.
    #[test]
    fn property_descendant_is_rerooted(rel in relative()) {
        let root = PathBuf::from("/work/fight-mobile-app");
        let dest = PathBuf::from("/staging");

        let staged = StagedPath::resolve(&root.join(&rel), &root).unwrap();

        prop_assert_eq!(staged.relative(), rel.as_path());
        prop_assert_eq!(staged.destination_in(&dest), dest.join(&rel));
    }

    /// PROPERTY: the destination of a resolved path never leaves the destination root.
    #[test]
    fn property_destination_stays_inside(rel in relative(), climb in 0usize..3) {
        let root = PathBuf::from("/work/fight-mobile-app");
        let dest = PathBuf::from("/staging");
        let mut source = root.clone();
        for _ in 0..climb {
            source.push("..");
        }
        source.push(&rel);

        if let Ok(staged) = StagedPath::resolve(&source, &root) {
            let target = staged.destination_in(&dest);
            prop_assert!(target.starts_with(&dest));
            prop_assert!(!target.components().any(|c| matches!(c, Component::ParentDir)));
        }
    }

    /// PROPERTY: paths under a sibling directory never resolve.
    #[test]
    fn property_sibling_is_rejected(rel in relative()) {
        let root = PathBuf::from("/work/fight-mobile-app");
        let source = PathBuf::from("/work/fight-mobile-app-old").join(&rel);

        prop_assert!(StagedPath::resolve(&source, &root).is_err());
    }
}
