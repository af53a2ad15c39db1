//! Decides how raw input maps onto TeX math mode.
//!
//! Input that already opens a block environment (`\begin{align}` etc.) is
//! rendered as-is in display mode. Multi-line input is joined into an
//! `aligned` block. Everything else is treated as a single inline
//! expression. The renderer cannot consume raw newlines, so any that
//! survive are collapsed to spaces.

/// Block environments that put the renderer in display math mode on
/// their own. Anything else (`matrix`, `array`, ...) is a sub-expression
/// and stays inline.
const BLOCK_ENVIRONMENTS: &[&str] = &[
    "align",
    "align*",
    "aligned",
    "alignat",
    "alignat*",
    "cases",
    "eqnarray",
    "eqnarray*",
    "equation",
    "equation*",
    "gather",
    "gather*",
    "multline",
    "multline*",
    "split",
];

/// Expression text prepared for the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathMarkup {
    /// TeX source with newlines collapsed and multi-line input wrapped.
    pub tex: String,
    /// True when the markup is an inline expression that the renderer
    /// must place in math delimiters; false when the text is already a
    /// complete display-math block.
    pub needs_delimiters: bool,
}

/// Prepare raw input for the renderer.
pub fn prepare(raw: &str) -> MathMarkup {
    let trimmed = raw.trim();

    if starts_with_block_environment(trimmed) {
        return MathMarkup {
            tex: collapse_newlines(trimmed),
            needs_delimiters: false,
        };
    }

    let lines: Vec<&str> = trimmed
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let tex = if lines.len() > 1 {
        format!(
            "\\begin{{aligned}}{}\\end{{aligned}}",
            lines.join(" \\\\ ")
        )
    } else {
        collapse_newlines(trimmed)
    };

    MathMarkup {
        tex,
        needs_delimiters: true,
    }
}

fn starts_with_block_environment(text: &str) -> bool {
    BLOCK_ENVIRONMENTS
        .iter()
        .any(|env| text.starts_with(&format!("\\begin{{{}}}", env)))
}

fn collapse_newlines(text: &str) -> String {
    if text.contains('\n') {
        text.replace('\n', " ")
    } else {
        text.to_string()
    }
}
