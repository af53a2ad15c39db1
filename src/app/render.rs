//! Glue between prepared TeX markup and the MathJax renderer.
//!
//! All real typesetting happens inside `mathjax_svg`; this module only
//! assembles the final TeX string and post-processes the returned SVG.

use crate::app::error::{AppError, Result};
use crate::app::mathmode::{self, MathMarkup};
use crate::app::settings::{AppSettings, Background};

/// MathJax sizes its SVG output relative to a 16px em; the font-size
/// setting becomes a uniform scale on top of that.
pub const BASE_EM_PX: f32 = 16.0;

/// Render an equation to an SVG document string.
///
/// The expression must be non-empty; callers check that before invoking
/// the renderer.
pub fn render_svg(expression: &str, settings: &AppSettings) -> Result<String> {
    let markup = mathmode::prepare(expression);
    let tex = compose_tex(&markup, settings.display_style);

    mathjax_svg::convert_to_svg(&tex).map_err(|e| AppError::Render(e.to_string()))
}

/// Build the TeX string handed to the renderer.
///
/// `\displaystyle` only applies to inline expressions; block environments
/// are already display style and reject the prefix.
pub fn compose_tex(markup: &MathMarkup, display_style: bool) -> String {
    if display_style && markup.needs_delimiters {
        format!("\\displaystyle {}", markup.tex)
    } else {
        markup.tex.clone()
    }
}

/// Inject a full-size background rect as the first child of the SVG
/// root. Transparent backgrounds leave the document untouched.
pub fn apply_background(svg: &str, background: Background) -> String {
    let Some(color) = background.hex() else {
        return svg.to_string();
    };

    let Some(open_start) = svg.find("<svg") else {
        return svg.to_string();
    };
    let Some(open_len) = svg[open_start..].find('>') else {
        return svg.to_string();
    };

    let insert_at = open_start + open_len + 1;
    let rect = format!("<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>", color);

    let mut out = String::with_capacity(svg.len() + rect.len());
    out.push_str(&svg[..insert_at]);
    out.push_str(&rect);
    out.push_str(&svg[insert_at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::mathmode::prepare;

    #[test]
    fn test_displaystyle_prefix_inline() {
        let markup = prepare("x + y");
        assert_eq!(compose_tex(&markup, true), "\\displaystyle x + y");
        assert_eq!(compose_tex(&markup, false), "x + y");
    }

    #[test]
    fn test_displaystyle_skipped_for_blocks() {
        let markup = prepare("\\begin{align}x &= y\\end{align}");
        let tex = compose_tex(&markup, true);
        assert!(tex.starts_with("\\begin{align}"));
    }

    #[test]
    fn test_background_injection() {
        let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="4ex"><g></g></svg>"#;
        let out = apply_background(svg, Background::White);
        let rect_at = out.find("<rect").unwrap();
        let g_at = out.find("<g>").unwrap();
        assert!(rect_at < g_at);
        assert!(out.contains("fill=\"#ffffff\""));
    }

    #[test]
    fn test_transparent_background_untouched() {
        let svg = "<svg><g/></svg>";
        assert_eq!(apply_background(svg, Background::Transparent), svg);
    }

    #[test]
    fn test_background_with_xml_prolog() {
        let svg = "<?xml version=\"1.0\"?><svg viewBox=\"0 0 10 10\"><path/></svg>";
        let out = apply_background(svg, Background::LightGray);
        assert!(out.starts_with("<?xml"));
        let rect_at = out.find("<rect").unwrap();
        let path_at = out.find("<path").unwrap();
        assert!(rect_at < path_at);
    }
}
