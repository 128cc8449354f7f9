// Assembled output documents as typed section sequences. Assembly is pure
// data construction; rendering to the persisted format happens only at the
// output boundary.

pub mod assembler;

use serde::Serialize;

/// One typed block of an assembled document, in display order.
#[derive(Debug, Clone, Serialize)]
pub enum Section {
    /// Name plus contact parts (location, phone, email, links) on one line.
    Header { name: String, contact: Vec<String> },
    Heading(String),
    Paragraph(String),
    /// Verbatim lines, one per row (the skills block).
    Lines(Vec<String>),
    BulletList(Vec<String>),
    ProjectBlock { title: String, bullets: Vec<String> },
    EducationBlock {
        school: String,
        dates: String,
        bullets: Vec<String>,
    },
    /// Pre-truncated keyword vocabulary; rendered as a trailing italic line.
    KeywordFooter(String),
}

/// An assembled resume or cover letter. Built once per posting and handed
/// straight to the persistence collaborator; never retained.
#[derive(Debug, Clone, Serialize, Default)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable append, so assembly reads as one section-ordered expression.
    pub fn push(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}
