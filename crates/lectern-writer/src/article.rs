//! Article generation and formatting.

use chrono::{DateTime, Utc};
use lectern_content::{write_block, write_frontmatter, write_sections, WriteOptions};
use lectern_core::{Article, Difficulty};

use crate::template::{next_steps_section, template_sections, FALLBACK_TITLE};

/// Timestamp format of the `generated` frontmatter field.
pub const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Value written to the `complexity` frontmatter field.
pub const COMPLEXITY_LEVELS: &str = "simple|medium|advanced";

/// Blockquote placed between the title and the first section.
pub const INTRO_NOTE: &str = "> This article is available in three difficulty levels. Hover over paragraphs or use the complexity selector to switch between simple, medium, and advanced explanations.";

/// Build an article from the built-in template, stamped with the current time.
///
/// A blank `topic` falls back to the template's own title. `complexity` is
/// accepted for callers that select a level up front; every level is always
/// generated.
pub fn generate_article(topic: &str, complexity: Difficulty) -> Article {
    generate_article_at(topic, complexity, Utc::now())
}

/// Same as [`generate_article`] with an explicit generation time.
pub fn generate_article_at(topic: &str, complexity: Difficulty, at: DateTime<Utc>) -> Article {
    let topic = topic.trim();
    let title = if topic.is_empty() { FALLBACK_TITLE } else { topic };
    log::debug!("Generating '{title}' (requested complexity: {complexity})");

    let mut article = Article::new(title);
    article
        .frontmatter
        .insert("title".to_string(), title.to_string());
    article
        .frontmatter
        .insert("complexity".to_string(), COMPLEXITY_LEVELS.to_string());
    article
        .frontmatter
        .insert("generated".to_string(), at.format(GENERATED_FORMAT).to_string());
    article.sections = template_sections();
    article
}

/// Render a generated article as tiered markdown.
///
/// Layout: frontmatter, `# title`, the intro note, every section with
/// labelled blocks and `---` rules, then an unlabelled "Next Steps" trailer.
pub fn format_article(article: &Article) -> String {
    let mut out = write_frontmatter(
        ["title", "complexity", "generated"]
            .into_iter()
            .filter_map(|key| article.frontmatter_value(key).map(|value| (key, value))),
    );
    out.push('\n');
    out.push_str("# ");
    out.push_str(&article.title);
    out.push_str("\n\n");
    out.push_str(INTRO_NOTE);
    out.push_str("\n\n");

    out.push_str(&write_sections(&article.sections, &WriteOptions::default()));

    let trailer = next_steps_section();
    out.push_str("\n## ");
    out.push_str(&trailer.title);
    out.push_str("\n\n");
    for level in Difficulty::ALL {
        write_block(&mut out, level, trailer.content.get(level), false);
    }
    out
}
