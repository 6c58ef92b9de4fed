use crate::documents::content::{DocumentKind, DEFAULT_FILE_STEM};

/// `Jane Doe` + résumé → `Jane_Doe_Resume.docx`.
///
/// Whitespace runs become `_`; anything other than ASCII alphanumerics, `-` and `_`
/// is dropped so the name is safe in a path and in a `Content-Disposition` header.
pub fn document_filename(name: Option<&str>, kind: DocumentKind) -> String {
    let stem = name
        .unwrap_or_default()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    let stem = if stem.is_empty() {
        DEFAULT_FILE_STEM
    } else {
        stem.as_str()
    };
    format!("{stem}_{}.docx", kind.file_suffix())
}
