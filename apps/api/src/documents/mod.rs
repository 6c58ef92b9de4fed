// Document export: content records → document tree → .docx bytes.
// Assembly and packing are CPU-bound; handlers run `export` inside spawn_blocking.

pub mod content;
pub mod cover_letter;
pub mod filename;
pub mod handlers;
pub mod render;
pub mod resume;
pub mod tree;

use chrono::NaiveDate;

use crate::documents::content::DocumentRequest;
use crate::documents::cover_letter::assemble_cover_letter;
use crate::documents::filename::document_filename;
use crate::documents::render::{render_docx, DocumentError};
use crate::documents::resume::assemble_resume;
use crate::models::profile::non_blank;

#[derive(Debug)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

pub fn export(
    request: &DocumentRequest,
    today: NaiveDate,
) -> Result<ExportedDocument, DocumentError> {
    let tree = match request {
        DocumentRequest::Resume(profile) => assemble_resume(profile),
        DocumentRequest::CoverLetter(letter) => assemble_cover_letter(letter, today),
    };
    let bytes = render_docx(&tree)?;
    let filename = document_filename(
        non_blank(&request.personal_info().full_name),
        request.kind(),
    );

    Ok(ExportedDocument { filename, bytes })
}
