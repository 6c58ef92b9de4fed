use chrono::NaiveDate;

use crate::documents::content::{CoverLetterContent, DEFAULT_HIRING_MANAGER, DEFAULT_NAME};
use crate::documents::tree::{Block, BlockKind, GeneratedDocument, TextRun, SMALL_SIZE};
use crate::models::profile::non_blank;

/// Letter-style date, e.g. `March 4, 2026`.
pub fn format_letter_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Sender block, date, optional addressee block, then the non-empty paragraphs.
/// Salutation and sign-off are only added when there is at least one paragraph.
pub fn assemble_cover_letter(letter: &CoverLetterContent, date: NaiveDate) -> GeneratedDocument {
    let mut doc = GeneratedDocument::new();
    let info = &letter.personal_info;
    let job = &letter.job_info;
    let name = non_blank(&info.full_name).unwrap_or(DEFAULT_NAME);

    doc.push(Block::with_text(BlockKind::Title, TextRun::new(name).bold()).spacing_after(0));
    let contacts = [&info.email, &info.phone, &info.location];
    let contacts: Vec<&str> = contacts.into_iter().filter_map(non_blank).collect();
    let last = contacts.len().saturating_sub(1);
    for (i, contact) in contacts.into_iter().enumerate() {
        let block = Block::with_text(BlockKind::Contact, TextRun::new(contact).size(SMALL_SIZE));
        doc.push(if i == last { block } else { block.spacing_after(0) });
    }

    doc.push(Block::with_text(
        BlockKind::Paragraph,
        TextRun::new(format_letter_date(date)),
    ));

    let hiring_manager = non_blank(&job.hiring_manager);
    let company = non_blank(&job.company_name);
    if hiring_manager.is_some() || company.is_some() {
        let lines = [
            Some(hiring_manager.unwrap_or(DEFAULT_HIRING_MANAGER)),
            company,
            non_blank(&job.company_address),
        ];
        let lines: Vec<&str> = lines.into_iter().flatten().collect();
        let last = lines.len() - 1;
        for (i, line) in lines.into_iter().enumerate() {
            let block = Block::with_text(BlockKind::Paragraph, TextRun::new(line));
            doc.push(if i == last { block.spacing_after(200) } else { block.spacing_after(0) });
        }
    }

    let paragraphs = letter.paragraphs();
    if paragraphs.is_empty() {
        return doc;
    }

    doc.push(Block::with_text(
        BlockKind::Paragraph,
        TextRun::new(format!(
            "Dear {},",
            hiring_manager.unwrap_or(DEFAULT_HIRING_MANAGER)
        )),
    ));
    for paragraph in paragraphs {
        doc.push(
            Block::with_text(BlockKind::Paragraph, TextRun::new(paragraph)).spacing_after(200),
        );
    }
    doc.push(Block::with_text(BlockKind::Paragraph, TextRun::new("Sincerely,")).spacing_after(0));
    doc.push(Block::with_text(BlockKind::Paragraph, TextRun::new(name)));

    doc
}
