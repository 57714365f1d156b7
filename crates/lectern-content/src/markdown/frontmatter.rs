//! Frontmatter extraction from markdown files.
//!
//! Generated articles open with a metadata block between two `---` lines:
//!
//! ```markdown
//! ---
//! title: My Article
//! complexity: simple|medium|advanced
//! generated: 2025-01-01 12:00:00
//! ---
//!
//! # My Article
//! ```
//!
//! Each `key: value` line is read as-is, so a title such as `Rust #1 Guide`
//! or `1e3` keeps its exact text. Only a block with no such line (for
//! example a flow mapping `{title: Guide}`) is handed to the YAML parser.
//!
//! # Usage
//!
//! ```rust
//! use lectern_content::markdown::extract_frontmatter;
//!
//! let parsed = extract_frontmatter("---\ntitle: Tiers\n---\n\n## Intro\n");
//!
//! assert_eq!(parsed.get_str("title"), Some("Tiers"));
//! assert_eq!(parsed.body(), "\n## Intro\n");
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

static KEY_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+):\s*(.+)$").expect("Invalid key/value regex"));

const DELIMITER: &str = "---";

/// Outcome of [`extract_frontmatter`].
///
/// Holds the recovered string fields and the body content after the
/// frontmatter.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// Fields as strings.
    fields: BTreeMap<String, String>,
    /// Body content after the closing delimiter line.
    body: &'a str,
    /// Whether both delimiters were found.
    had_delimiters: bool,
}

impl<'a> FrontmatterResult<'a> {
    fn body_only(body: &'a str) -> Self {
        Self {
            fields: BTreeMap::new(),
            body,
            had_delimiters: false,
        }
    }

    /// Whether at least one field was recovered.
    pub fn has_frontmatter(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Whether a delimited block was found, recovered fields or not.
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Text after the closing delimiter line.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// One field by key.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Borrow all string fields.
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Take ownership of the string fields.
    pub fn into_fields(self) -> BTreeMap<String, String> {
        self.fields
    }
}

/// Extract frontmatter from markdown content.
///
/// # Behavior
///
/// - Content must start with a `---` line; otherwise there is no frontmatter.
/// - The block ends at the next line that is exactly `---`. Without one, the
///   whole content is body and a warning is logged.
/// - Lines matching `key: value` become fields with the value text kept
///   verbatim (trimmed). When no line matches, a YAML mapping is flattened
///   to string fields instead, skipping nested values.
///
/// ```rust
/// use lectern_content::markdown::extract_frontmatter;
///
/// let result = extract_frontmatter("---\ntitle: Rust: The Basics\n---\n# Heading");
/// assert_eq!(result.get_str("title"), Some("Rust: The Basics"));
/// assert_eq!(result.body(), "# Heading");
///
/// let plain = extract_frontmatter("## No metadata");
/// assert!(!plain.had_delimiters());
/// assert_eq!(plain.body(), "## No metadata");
/// ```
pub fn extract_frontmatter(content: &str) -> FrontmatterResult<'_> {
    let mut lines = content.split_inclusive('\n');

    let Some(first) = lines.next() else {
        return FrontmatterResult::body_only(content);
    };
    if trim_line_ending(first) != DELIMITER || !first.ends_with('\n') {
        return FrontmatterResult::body_only(content);
    }

    let block_start = first.len();
    let mut offset = block_start;
    let mut closing = None;
    for line in lines {
        if trim_line_ending(line) == DELIMITER {
            closing = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((block_end, body_start)) = closing else {
        log::warn!("Unclosed frontmatter block, treating the whole file as body");
        return FrontmatterResult::body_only(content);
    };

    let block = &content[block_start..block_end];
    let body = &content[body_start..];

    let mut fields = parse_key_value_lines(block);
    if fields.is_empty() && !block.trim().is_empty() {
        fields = parse_yaml_mapping(block);
    }

    FrontmatterResult {
        fields,
        body,
        had_delimiters: true,
    }
}

/// Everything after the frontmatter block (or all of `content` if none).
///
/// ```rust
/// use lectern_content::markdown::strip_frontmatter;
///
/// let body = strip_frontmatter("---\ntitle: Test\n---\n\n# Heading");
/// assert_eq!(body, "\n# Heading");
/// ```
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content).body()
}

/// Render string fields as a frontmatter block, in the order given.
///
/// ```rust
/// use lectern_content::markdown::write_frontmatter;
///
/// let block = write_frontmatter([("title", "Guide"), ("complexity", "medium")]);
/// assert_eq!(block, "---\ntitle: Guide\ncomplexity: medium\n---\n");
/// ```
pub fn write_frontmatter<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut out = String::from("---\n");
    for (key, value) in fields {
        out.push_str(key);
        out.push_str(": ");
        out.push_str(value);
        out.push('\n');
    }
    out.push_str("---\n");
    out
}

fn trim_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

fn parse_yaml_mapping(block: &str) -> BTreeMap<String, String> {
    match serde_yaml::from_str::<Value>(block) {
        Ok(Value::Mapping(mapping)) => mapping
            .iter()
            .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
            .collect(),
        Ok(_) => BTreeMap::new(),
        Err(e) => {
            log::debug!("Frontmatter has no key/value lines and is not YAML: {e}");
            BTreeMap::new()
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_key_value_lines(block: &str) -> BTreeMap<String, String> {
    block
        .lines()
        .filter_map(|line| {
            let caps = KEY_VALUE_RE.captures(line.trim_end())?;
            Some((caps[1].to_string(), caps[2].trim().to_string()))
        })
        .collect()
}
