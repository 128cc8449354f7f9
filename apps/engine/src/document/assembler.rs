//! Composes selected content and fixed profile fields into documents.

use crate::matching::selector::Selection;
use crate::models::posting::Posting;
use crate::models::profile::Profile;

use super::{Document, Section};

/// Hard character cap on the keyword footer vocabulary.
const KEYWORD_FOOTER_MAX: usize = 800;
/// Project named in the cover letter when the selection came back empty.
const FALLBACK_PROJECT: &str = "NLP matching";

/// Assembles the tailored resume in its fixed section order: header,
/// summary, skills, relevant projects (selected projects, then general
/// statements as extra bullets), education, keyword footer.
///
/// Total over sparse input: an empty selection still yields a valid
/// document with all fixed sections present.
pub fn assemble_resume(profile: &Profile, selection: &Selection, tokens: &[String]) -> Document {
    let mut contact = vec![
        profile.location.clone(),
        profile.phone.clone(),
        profile.email.clone(),
    ];
    contact.extend(profile.links.iter().cloned());

    let mut doc = Document::new()
        .push(Section::Header {
            name: profile.name.clone(),
            contact,
        })
        .push(Section::Heading("SUMMARY".to_string()))
        .push(Section::Paragraph(profile.summary.clone()))
        .push(Section::Heading("SKILLS".to_string()))
        .push(Section::Lines(profile.skills.clone()))
        .push(Section::Heading("RELEVANT PROJECTS".to_string()));

    for project in &selection.projects {
        doc = doc.push(Section::ProjectBlock {
            title: project.title.clone(),
            bullets: project.bullets.clone(),
        });
    }
    doc = doc.push(Section::BulletList(selection.general.clone()));

    doc = doc.push(Section::Heading("EDUCATION".to_string()));
    for education in &profile.education {
        doc = doc.push(Section::EducationBlock {
            school: education.school.clone(),
            dates: education.dates.clone(),
            bullets: education.bullets.clone(),
        });
    }

    doc.push(Section::KeywordFooter(keyword_footer(tokens)))
}

/// Assembles the cover letter: fixed salutation, one paragraph naming the
/// posting title and the lead selected project, a fixed values paragraph,
/// and a fixed closing with the profile name.
pub fn assemble_cover_letter(
    profile: &Profile,
    posting: &Posting,
    selection: &Selection,
) -> Document {
    let lead_project = selection
        .projects
        .first()
        .map(|p| p.title.as_str())
        .unwrap_or(FALLBACK_PROJECT);

    Document::new()
        .push(Section::Paragraph("Dear Hiring Team,".to_string()))
        .push(Section::Paragraph(format!(
            "I'm applying for {}. My experience in data/ML and healthcare includes \
             projects like {} and PySpark analytics.",
            posting.title, lead_project
        )))
        .push(Section::Paragraph(
            "I value clean, reproducible pipelines and clear communication. Excited to contribute."
                .to_string(),
        ))
        .push(Section::Paragraph(format!("Thank you,\n{}", profile.name)))
}

/// Sorted, de-duplicated token vocabulary joined with ", " and hard-cut at
/// `KEYWORD_FOOTER_MAX` characters. The cut is by character, not word.
fn keyword_footer(tokens: &[String]) -> String {
    let mut vocabulary: Vec<&str> = tokens.iter().map(String::as_str).collect();
    vocabulary.sort_unstable();
    vocabulary.dedup();
    vocabulary
        .join(", ")
        .chars()
        .take(KEYWORD_FOOTER_MAX)
        .collect()
}
