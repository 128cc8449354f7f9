// Persistence collaborators: document storage and the activity log. The
// runner hands over assembled documents and never inspects the storage
// format.

pub mod activity_log;

use std::fs;
use std::path::Path;

use crate::document::{Document, Section};
use crate::errors::AppError;

/// Persists an assembled document at a destination path. The on-disk format
/// is owned entirely by the implementation.
pub trait DocumentStore: Send + Sync {
    fn save(&self, document: &Document, path: &Path) -> Result<(), AppError>;
}

/// Renders documents to Markdown files under the configured output directory.
pub struct MarkdownStore;

impl DocumentStore for MarkdownStore {
    fn save(&self, document: &Document, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::Persistence(format!("create '{}': {e}", parent.display()))
            })?;
        }
        fs::write(path, render_markdown(document))
            .map_err(|e| AppError::Persistence(format!("write '{}': {e}", path.display())))
    }
}

/// Renders the typed section sequence to Markdown.
pub fn render_markdown(document: &Document) -> String {
    let mut out = String::new();
    for section in &document.sections {
        match section {
            Section::Header { name, contact } => {
                out.push_str(&format!("**{name}**"));
                for part in contact.iter().filter(|part| !part.is_empty()) {
                    out.push_str(&format!("  |  {part}"));
                }
                out.push_str("\n\n");
            }
            Section::Heading(text) => out.push_str(&format!("## {text}\n\n")),
            Section::Paragraph(text) => out.push_str(&format!("{text}\n\n")),
            Section::Lines(lines) => {
                for line in lines {
                    out.push_str(line);
                    out.push('\n');
                }
                if !lines.is_empty() {
                    out.push('\n');
                }
            }
            Section::BulletList(items) => {
                for item in items {
                    out.push_str(&format!("- {item}\n"));
                }
                if !items.is_empty() {
                    out.push('\n');
                }
            }
            Section::ProjectBlock { title, bullets } => {
                out.push_str(&format!("**{title}**\n"));
                for bullet in bullets {
                    out.push_str(&format!("- {bullet}\n"));
                }
                out.push('\n');
            }
            Section::EducationBlock {
                school,
                dates,
                bullets,
            } => {
                out.push_str(&format!("**{school}** — {dates}\n"));
                for bullet in bullets {
                    out.push_str(&format!("- {bullet}\n"));
                }
                out.push('\n');
            }
            Section::KeywordFooter(vocabulary) => {
                out.push_str(&format!("*Keywords: {vocabulary}*\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_header_joins_contact_parts() {
        let doc = Document::new().push(Section::Header {
            name: "Jane Doe".to_string(),
            contact: vec![
                "Brooklyn, NY".to_string(),
                String::new(), // empty parts are skipped
                "jane@example.com".to_string(),
            ],
        });
        let markdown = render_markdown(&doc);
        assert_eq!(
            markdown,
            "**Jane Doe**  |  Brooklyn, NY  |  jane@example.com\n\n"
        );
    }

    #[test]
    fn test_render_project_block_with_bullets() {
        let doc = Document::new().push(Section::ProjectBlock {
            title: "Churn Model".to_string(),
            bullets: vec!["Built it".to_string(), "Shipped it".to_string()],
        });
        assert_eq!(
            render_markdown(&doc),
            "**Churn Model**\n- Built it\n- Shipped it\n\n"
        );
    }

    #[test]
    fn test_render_keyword_footer_is_italic() {
        let doc = Document::new().push(Section::KeywordFooter("python, sql".to_string()));
        assert_eq!(render_markdown(&doc), "*Keywords: python, sql*\n");
    }

    #[test]
    fn test_empty_bullet_list_renders_nothing() {
        let doc = Document::new().push(Section::BulletList(vec![]));
        assert_eq!(render_markdown(&doc), "");
    }

    #[test]
    fn test_markdown_store_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/resume_1.md");
        let doc = Document::new().push(Section::Heading("SUMMARY".to_string()));

        MarkdownStore.save(&doc, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "## SUMMARY\n\n");
    }
}
