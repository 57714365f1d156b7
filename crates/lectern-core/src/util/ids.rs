//! Heading slugs.
//!
//! The viewer anchors each section at an id derived from its heading, so the
//! same heading must always produce the same id.

/// Slug a heading: lowercase words joined by single hyphens.
///
/// Any character that is not alphanumeric separates words, so underscores,
/// punctuation, and whitespace runs all collapse into one `-`.
///
/// ```
/// use lectern_core::util::ids::normalize_id;
///
/// assert_eq!(normalize_id("Best Practices"), "best-practices");
/// assert_eq!(normalize_id("What is an AI-First Repository?"), "what-is-an-ai-first-repository");
/// assert_eq!(normalize_id("next_steps"), "next-steps");
/// assert_eq!(normalize_id(" -- Spaced -- Out -- "), "spaced-out");
/// ```
pub fn normalize_id(id: &str) -> String {
    id.trim()
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<&str>>()
        .join("-")
}

/// Normalize `id`, falling back to `fallback` when nothing alphanumeric is left.
///
/// ```
/// use lectern_core::util::ids::normalize_id_or;
///
/// assert_eq!(normalize_id_or("Conclusion", "section-5"), "conclusion");
/// assert_eq!(normalize_id_or("???", "section-5"), "section-5");
/// ```
pub fn normalize_id_or(id: &str, fallback: &str) -> String {
    let normalized = normalize_id(id);
    if normalized.is_empty() {
        fallback.to_string()
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_headings() {
        let cases = [
            ("Introduction", "introduction"),
            ("Working with Cursor", "working-with-cursor"),
            ("Setting Up the Repository Structure", "setting-up-the-repository-structure"),
            ("Next Steps", "next-steps"),
        ];
        for (heading, slug) in cases {
            assert_eq!(normalize_id(heading), slug);
        }
    }

    #[test]
    fn test_separators_collapse() {
        assert_eq!(normalize_id("snake_case_heading"), "snake-case-heading");
        assert_eq!(normalize_id("Setup (v2.0)"), "setup-v2-0");
        assert_eq!(normalize_id("\tTabs\tand  spaces "), "tabs-and-spaces");
    }

    #[test]
    fn test_slug_is_stable() {
        assert_eq!(normalize_id("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_non_ascii_letters_kept() {
        assert_eq!(normalize_id("Résumé Über"), "résumé-über");
    }

    #[test]
    fn test_nothing_alphanumeric() {
        for input in ["", "   ", "?!", "---"] {
            assert_eq!(normalize_id(input), "", "{input:?}");
        }
    }

    #[test]
    fn test_fallback_only_when_empty() {
        assert_eq!(normalize_id_or("", "section-0"), "section-0");
        assert_eq!(normalize_id_or("Intro", "section-0"), "intro");
    }
}
