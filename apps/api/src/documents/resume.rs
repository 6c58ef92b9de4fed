//! Résumé assembly. Section order is fixed:
//! title block → Professional Summary → Experience → Education → Skills.
//! Every section after the title block is omitted when it has nothing to show.

use crate::documents::content::{BULLET, CONTACT_SEPARATOR, DEFAULT_NAME, PRESENT_LABEL};
use crate::documents::tree::{
    Block, BlockKind, GeneratedDocument, TextRun, MUTED_COLOR, SMALL_SIZE, TITLE_SIZE,
};
use crate::models::profile::{non_blank, CandidateProfile, Education, SkillLevel, WorkExperience};

pub fn assemble_resume(profile: &CandidateProfile) -> GeneratedDocument {
    let mut doc = GeneratedDocument::new();
    let info = &profile.personal_info;

    let name = non_blank(&info.full_name).unwrap_or(DEFAULT_NAME);
    doc.push(
        Block::with_text(BlockKind::Title, TextRun::new(name).bold().size(TITLE_SIZE)).centered(),
    );

    let contacts = info.contact_fields();
    if !contacts.is_empty() {
        doc.push(
            Block::with_text(
                BlockKind::Contact,
                TextRun::new(contacts.join(CONTACT_SEPARATOR))
                    .size(SMALL_SIZE)
                    .color(MUTED_COLOR),
            )
            .centered(),
        );
    }

    if let Some(summary) = non_blank(&info.summary) {
        doc.heading("Professional Summary");
        doc.push(Block::with_text(BlockKind::Paragraph, TextRun::new(summary)));
    }

    if !profile.experiences.is_empty() {
        doc.heading("Experience");
        for exp in &profile.experiences {
            push_experience(&mut doc, exp);
        }
    }

    if !profile.education.is_empty() {
        doc.heading("Education");
        for edu in &profile.education {
            push_education(&mut doc, edu);
        }
    }

    let groups = group_skills(profile);
    if !groups.is_empty() {
        doc.heading("Skills");
        for (level, names) in groups {
            doc.push(
                Block::new(BlockKind::Paragraph)
                    .run(TextRun::new(format!("{level}: ")).bold())
                    .run(TextRun::new(names.join(", "))),
            );
        }
    }

    doc
}

fn push_experience(doc: &mut GeneratedDocument, exp: &WorkExperience) {
    let position = non_blank(&exp.position);
    let company = non_blank(&exp.company);

    if position.is_some() || company.is_some() {
        let mut line = Block::new(BlockKind::Paragraph).spacing_after(0);
        if let Some(position) = position {
            line = line.run(TextRun::new(position).bold());
        }
        if let Some(company) = company {
            let text = match position {
                Some(_) => format!("{CONTACT_SEPARATOR}{company}"),
                None => company.to_string(),
            };
            line = line.run(TextRun::new(text));
        }
        doc.push(line);
    }

    if let Some(range) = date_range(exp) {
        doc.push(Block::with_text(
            BlockKind::Paragraph,
            TextRun::new(range).italic().size(SMALL_SIZE).color(MUTED_COLOR),
        ));
    }

    for bullet in description_bullets(exp.description.as_deref().unwrap_or_default()) {
        doc.push(Block::with_text(BlockKind::Bullet, TextRun::new(bullet)));
    }
}

fn push_education(doc: &mut GeneratedDocument, edu: &Education) {
    let heading = match (non_blank(&edu.degree), non_blank(&edu.field)) {
        (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
        (Some(degree), None) => Some(degree.to_string()),
        (None, Some(field)) => Some(field.to_string()),
        (None, None) => None,
    };
    if let Some(heading) = heading {
        doc.push(
            Block::with_text(BlockKind::Paragraph, TextRun::new(heading).bold()).spacing_after(0),
        );
    }

    let gpa = non_blank(&edu.gpa).map(|g| format!("GPA: {g}"));
    let details: Vec<&str> = [non_blank(&edu.school), non_blank(&edu.graduation_date)]
        .into_iter()
        .flatten()
        .chain(gpa.as_deref())
        .collect();
    if !details.is_empty() {
        doc.push(Block::with_text(
            BlockKind::Paragraph,
            TextRun::new(details.join(CONTACT_SEPARATOR)).size(SMALL_SIZE),
        ));
    }
}

/// `"{start} – {end}"`, with `Present` for current roles or a missing end.
/// `None` when there is no start date.
fn date_range(exp: &WorkExperience) -> Option<String> {
    let start = non_blank(&exp.start_date)?;
    let end = if exp.current {
        PRESENT_LABEL
    } else {
        non_blank(&exp.end_date).unwrap_or(PRESENT_LABEL)
    };
    Some(format!("{start} – {end}"))
}

/// One bullet line per non-blank description line, each starting with the bullet glyph.
pub fn description_bullets(description: &str) -> Vec<String> {
    description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with(BULLET) {
                line.to_string()
            } else {
                format!("{BULLET} {line}")
            }
        })
        .collect()
}

/// Skill names grouped by level, groups in order of first appearance.
fn group_skills(profile: &CandidateProfile) -> Vec<(SkillLevel, Vec<&str>)> {
    let mut groups: Vec<(SkillLevel, Vec<&str>)> = Vec::new();
    for skill in &profile.skills {
        let name = skill.name.trim();
        if name.is_empty() {
            continue;
        }
        match groups.iter_mut().find(|(level, _)| *level == skill.level) {
            Some((_, names)) => names.push(name),
            None => groups.push((skill.level, vec![name])),
        }
    }
    groups
}
