use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub span: Range<usize>,
    pub replacement: String,
}

impl TextEdit {
    pub fn replace(span: Range<usize>, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self {
            span: at..at,
            replacement: text.into(),
        }
    }
}

/// Applies all edits against the original text in one pass. Edits are
/// ordered by start offset; an edit overlapping an already-applied one is
/// skipped rather than spliced mid-replacement.
pub fn apply_edits(code: &str, mut edits: Vec<TextEdit>) -> String {
    edits.sort_by_key(|e| (e.span.start, e.span.end));
    let mut out = String::with_capacity(code.len() + 64);
    let mut cursor = 0usize;
    for edit in edits {
        if edit.span.start < cursor {
            continue;
        }
        out.push_str(&code[cursor..edit.span.start]);
        out.push_str(&edit.replacement);
        cursor = edit.span.end;
    }
    out.push_str(&code[cursor..]);
    out
}
