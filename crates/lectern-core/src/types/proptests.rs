//! Property-based tests for core types.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::types::{Difficulty, SectionContent};
    use crate::util::ids::normalize_id;
    use proptest::prelude::*;

    fn any_difficulty() -> impl Strategy<Value = Difficulty> {
        prop_oneof![
            Just(Difficulty::Simple),
            Just(Difficulty::Medium),
            Just(Difficulty::Advanced),
        ]
    }

    proptest! {
        #[test]
        fn test_difficulty_display_parse_roundtrip(level in any_difficulty()) {
            let parsed: Difficulty = level.to_string().parse().unwrap();
            prop_assert_eq!(parsed, level);
        }

        #[test]
        fn test_set_then_get(level in any_difficulty(), text in "\\PC*") {
            let mut content = SectionContent::default();
            content.set(level, text.clone());
            prop_assert_eq!(content.get(level), text.as_str());
            for other in Difficulty::ALL.into_iter().filter(|l| *l != level) {
                prop_assert_eq!(content.get(other), "");
            }
        }

        #[test]
        fn test_normalize_id_is_idempotent(s in "\\PC*") {
            let once = normalize_id(&s);
            prop_assert_eq!(normalize_id(&once), once.clone());
            prop_assert!(!once.starts_with('-'));
            prop_assert!(!once.ends_with('-'));
        }
    }
}
