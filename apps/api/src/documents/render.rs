//! Serializes a `GeneratedDocument` into a `.docx` (WordprocessingML) byte buffer.

use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, LineSpacing, Paragraph, Run};
use thiserror::Error;

use crate::documents::tree::{Alignment, Block, GeneratedDocument, TextRun};

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to package document: {0}")]
    Pack(String),
}

pub fn render_docx(doc: &GeneratedDocument) -> Result<Vec<u8>, DocumentError> {
    let docx = doc
        .blocks()
        .iter()
        .fold(Docx::new(), |docx, block| docx.add_paragraph(to_paragraph(block)));

    let mut buffer = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buffer)
        .map_err(|e| DocumentError::Pack(e.to_string()))?;

    Ok(buffer.into_inner())
}

fn to_paragraph(block: &Block) -> Paragraph {
    let paragraph = block
        .runs
        .iter()
        .fold(Paragraph::new(), |p, run| p.add_run(to_run(run)))
        .line_spacing(
            LineSpacing::new()
                .before(block.spacing_before)
                .after(block.spacing_after),
        );

    match block.alignment {
        Alignment::Center => paragraph.align(AlignmentType::Center),
        Alignment::Left => paragraph,
    }
}

fn to_run(run: &TextRun) -> Run {
    let mut out = Run::new().add_text(run.text.as_str()).size(run.size);
    if run.bold {
        out = out.bold();
    }
    if run.italic {
        out = out.italic();
    }
    if let Some(color) = run.color {
        out = out.color(color);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::tree::BlockKind;

    /// Paragraph texts read back from a packed document.
    fn read_back(bytes: &[u8]) -> Vec<String> {
        let docx = docx_rs::read_docx(bytes).unwrap();
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                docx_rs::DocumentChild::Paragraph(p) => Some(
                    p.children
                        .iter()
                        .filter_map(|c| match c {
                            docx_rs::ParagraphChild::Run(run) => Some(run),
                            _ => None,
                        })
                        .flat_map(|run| run.children.iter())
                        .filter_map(|rc| match rc {
                            docx_rs::RunChild::Text(t) => Some(t.text.clone()),
                            _ => None,
                        })
                        .collect::<String>(),
                ),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_document_still_packs() {
        let bytes = render_docx(&GeneratedDocument::new()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_rendered_text_survives_round_trip() {
        let mut doc = GeneratedDocument::new();
        doc.push(Block::with_text(BlockKind::Title, TextRun::new("Jane Doe").bold()).centered());
        doc.heading("Skills");
        doc.push(
            Block::new(BlockKind::Paragraph)
                .run(TextRun::new("Expert: ").bold())
                .run(TextRun::new("SQL, Git")),
        );

        let bytes = render_docx(&doc).unwrap();
        let texts = read_back(&bytes);
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], "Jane Doe");
        assert_eq!(texts[1], "Skills");
        assert!(texts[2].starts_with("Expert:"));
        assert!(texts[2].ends_with("SQL, Git"));
    }
}
