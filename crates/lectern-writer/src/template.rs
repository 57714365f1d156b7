//! The built-in article template.
//!
//! Six sections about setting up an AI-first repository and working with
//! Cursor, each written at three levels, plus a "Next Steps" trailer.

use lectern_core::{Section, SectionContent};

/// Title used when the topic is blank.
pub const FALLBACK_TITLE: &str = "Setting Up an AI-First Repository and Working with Cursor";

/// Heading of the trailer section appended after the template sections.
pub const NEXT_STEPS_TITLE: &str = "Next Steps";

/// Section titles in template order.
pub const SECTION_TITLES: [&str; 6] = [
    "Introduction",
    "What is an AI-First Repository?",
    "Setting Up the Repository Structure",
    "Working with Cursor",
    "Best Practices",
    "Conclusion",
];

const SECTION_TEXT: [[&str; 3]; 6] = [
    [
        "Welcome! This guide will help you set up a repository that works great with AI assistants like Cursor. Think of it as organizing your code so AI can help you better.",
        "This guide covers setting up an AI-first repository structure optimized for AI-powered development tools like Cursor. We'll explore best practices for organizing code, documentation, and tooling to maximize AI assistant effectiveness.",
        "An AI-first repository architecture optimizes code organization, documentation patterns, and tooling infrastructure to maximize the effectiveness of AI-powered development assistants. This guide examines architectural patterns, workflow optimizations, and integration strategies for Cursor and similar AI development environments.",
    ],
    [
        "An AI-first repository is a project organized so AI assistants can easily understand and help with it. It's like having a well-organized filing cabinet where everything has a clear label.",
        "An AI-first repository employs structured organization, comprehensive documentation, and standardized patterns that enable AI assistants to effectively understand, navigate, and contribute to the codebase. Key principles include self-documenting code, consistent naming conventions, and explicit metadata.",
        "AI-first repository architecture applies information architecture principles to software development, creating codebases optimized for AI comprehension and manipulation. This involves semantic organization, explicit metadata systems (like MANIFEST.json), standardized tool interfaces, and documentation patterns that enable autonomous AI agent operation. The architecture prioritizes discoverability, predictability, and textual feedback loops over human-centric optimizations.",
    ],
    [
        "Start by creating folders for different parts of your project. Put tools in a 'tools' folder, documentation in a 'docs' folder, and rules in a 'rules' folder. This helps AI find things quickly.",
        "Establish a clear directory hierarchy: `tools/` for executable tools organized by category, `docs/` for documentation, `rules/` for AI agent guidelines, and `.toolset/` for metadata. Each tool should include a MANIFEST.json with standardized metadata for AI discovery.",
        "Implement a hierarchical directory structure following domain-driven design principles: `tools/{category}/{tool-name}/` with standardized subdirectories (`scripts/`, `src/`, `docs/`). Each tool requires a MANIFEST.json following the toolset schema, including id, description, parameters, and AI-friendly metadata. The `.toolset/` directory contains registry.json (tool inventory), operations.json (operation definitions), and configuration files. This structure enables programmatic tool discovery and execution.",
    ],
    [
        "Cursor is an AI-powered code editor. To use it well, write clear comments in your code and organize files logically. Cursor's AI can then better understand what you're trying to do.",
        "Cursor leverages AI models to assist with code generation, refactoring, and navigation. Optimize for Cursor by maintaining clear code structure, comprehensive documentation, and consistent patterns. Use Cursor's rules system (`.cursorrules` files) to guide AI behavior and establish project-specific conventions.",
        "Cursor integrates language models directly into the development workflow, enabling autonomous code generation and modification. Optimize Cursor effectiveness through: (1) structured rulesets in `.cursorrules` files with clear precedence hierarchies, (2) self-documenting code patterns that expose intent to AI models, (3) standardized tool interfaces enabling AI-driven tool discovery and execution, and (4) textual feedback loops where AI can verify its own work through command execution and output analysis. Configure Cursor rules following the project's rule precedence system (system > project > domain > tool).",
    ],
    [
        "Keep things simple and organized. Write clear names for files and folders. Add comments explaining what your code does. Make sure your README file explains how to use your project.",
        "Follow these practices: (1) Use descriptive, consistent naming conventions, (2) Include MANIFEST.json files for all tools with complete metadata, (3) Maintain up-to-date README files with usage examples, (4) Document the \"why\" not just the \"what\", (5) Use standardized script interfaces, and (6) Keep documentation close to code.",
        "Implement these architectural patterns: (1) Semantic versioning for tools and operations, (2) Operation codes (`tool:operation`) for programmatic tool invocation, (3) Structured error handling with parseable output formats, (4) Non-interactive command interfaces (use `--yes` flags), (5) Textual output for AI parsing (avoid binary formats), (6) Self-verification mechanisms enabling AI to validate its own changes, and (7) Privacy-aware design separating public (committed) from private (local config) data.",
    ],
    [
        "Setting up an AI-first repository helps you work better with AI assistants. Start simple, keep things organized, and you'll see the benefits quickly!",
        "An AI-first repository structure significantly enhances productivity when working with AI development tools. By following these patterns and best practices, you create a codebase that AI assistants can effectively understand and contribute to.",
        "AI-first repository architecture represents a paradigm shift toward codebases optimized for AI comprehension and manipulation. The investment in structured organization, comprehensive documentation, and standardized interfaces pays dividends in AI-assisted development velocity and quality. As AI development tools evolve, these architectural patterns will become increasingly critical for maintaining competitive development workflows.",
    ],
];

const NEXT_STEPS_TEXT: [&str; 3] = [
    "Try setting up a small project using these ideas. Start with clear folder names and a good README file.",
    "Begin by creating a basic tool structure with MANIFEST.json files. Experiment with Cursor's rules system and observe how AI behavior changes with different rule configurations.",
    "Implement a complete toolset following the patterns described. Create operation codes, integrate with MCP servers, and establish automated verification workflows. Consider contributing to open-source AI-first repository templates.",
];

/// The six template sections, in order.
pub fn template_sections() -> Vec<Section> {
    SECTION_TITLES
        .iter()
        .zip(SECTION_TEXT.iter())
        .map(|(title, [simple, medium, advanced])| {
            Section::with_content(*title, SectionContent::new(*simple, *medium, *advanced))
        })
        .collect()
}

/// The "Next Steps" trailer section.
pub fn next_steps_section() -> Section {
    let [simple, medium, advanced] = NEXT_STEPS_TEXT;
    Section::with_content(NEXT_STEPS_TITLE, SectionContent::new(simple, medium, advanced))
}
