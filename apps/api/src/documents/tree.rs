//! Request-scoped document tree: an ordered list of paragraph blocks made of styled runs.
//! Built by the assemblers, consumed once by the renderer, never persisted.

/// Font sizes are in half-points, as word processors store them.
pub const TITLE_SIZE: usize = 36;
pub const HEADING_SIZE: usize = 26;
pub const BODY_SIZE: usize = 22;
pub const SMALL_SIZE: usize = 20;

pub const HEADING_COLOR: &str = "2E74B5";
pub const MUTED_COLOR: &str = "595959";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    Contact,
    Heading,
    Paragraph,
    Bullet,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub size: usize,
    pub color: Option<&'static str>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italic: false,
            size: BODY_SIZE,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: &'static str) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub runs: Vec<TextRun>,
    pub alignment: Alignment,
    /// Twentieths of a point.
    pub spacing_before: u32,
    pub spacing_after: u32,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        let (spacing_before, spacing_after) = match kind {
            BlockKind::Title => (0, 60),
            BlockKind::Contact => (0, 200),
            BlockKind::Heading => (240, 80),
            BlockKind::Paragraph => (0, 80),
            BlockKind::Bullet => (0, 40),
        };
        Self {
            kind,
            runs: Vec::new(),
            alignment: Alignment::Left,
            spacing_before,
            spacing_after,
        }
    }

    /// Single-run block.
    pub fn with_text(kind: BlockKind, run: TextRun) -> Self {
        Self::new(kind).run(run)
    }

    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn spacing_after(mut self, twips: u32) -> Self {
        self.spacing_after = twips;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratedDocument {
    blocks: Vec<Block>,
}

impl GeneratedDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn heading(&mut self, title: &str) {
        self.push(Block::with_text(
            BlockKind::Heading,
            TextRun::new(title)
                .bold()
                .size(HEADING_SIZE)
                .color(HEADING_COLOR),
        ));
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

#[cfg(test)]
impl Block {
    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[cfg(test)]
impl GeneratedDocument {
    /// Plain text of every block, in order.
    pub fn texts(&self) -> Vec<String> {
        self.blocks.iter().map(Block::text).collect()
    }

    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_text_concatenates_runs() {
        let block = Block::new(BlockKind::Paragraph)
            .run(TextRun::new("Expert: ").bold())
            .run(TextRun::new("SQL, Git"));
        assert_eq!(block.text(), "Expert: SQL, Git");
        assert!(block.runs[0].bold);
        assert!(!block.runs[1].bold);
    }

    #[test]
    fn test_heading_uses_heading_style() {
        let mut doc = GeneratedDocument::new();
        doc.heading("Skills");
        let heading = &doc.blocks()[0];
        assert_eq!(heading.kind, BlockKind::Heading);
        assert_eq!(heading.runs[0].size, HEADING_SIZE);
        assert_eq!(heading.runs[0].color, Some(HEADING_COLOR));
    }
}
