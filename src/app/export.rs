//! Writes rendered SVG out as SVG, PNG or PDF and picks default
//! filenames for the save dialog.

use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

use crate::app::error::{AppError, Result};
use crate::app::filename;
use crate::app::render::BASE_EM_PX;
use crate::app::settings::{AppSettings, Background};

/// Raster export resolution.
const PNG_DPI: f32 = 300.0;

/// Default basename (no extension) offered in the save dialog.
pub fn default_basename(settings: &AppSettings, expression: &str) -> String {
    if settings.use_equation_filename {
        filename::sanitize(expression)
    } else {
        timestamp_basename(Local::now())
    }
}

fn timestamp_basename<Tz: chrono::TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("equation_{}", now.format("%Y%m%d_%H%M%S"))
}

/// Write the SVG document as-is.
pub fn save_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg)?;
    Ok(())
}

/// Rasterize the SVG into a pixmap at the given scale.
///
/// The pixmap is pre-filled with the background color so transparency
/// only ends up in the result when the background setting asks for it.
pub fn render_pixmap(
    svg: &str,
    scale: f32,
    background: Background,
) -> Result<resvg::tiny_skia::Pixmap> {
    let options = resvg::usvg::Options::default();
    let tree = resvg::usvg::Tree::from_str(svg, &options)
        .map_err(|e| AppError::Export(e.to_string()))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width.max(1), height.max(1))
        .ok_or_else(|| AppError::Export("pixmap allocation failed".to_string()))?;

    if let Some((r, g, b)) = background.rgb() {
        pixmap.fill(resvg::tiny_skia::Color::from_rgba8(r, g, b, 255));
    }

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(pixmap)
}

/// Rasterize the SVG to straight-alpha RGBA bytes, for on-screen
/// display. Returns (pixels, width, height).
pub fn rasterize_rgba(
    svg: &str,
    scale: f32,
    background: Background,
) -> Result<(Vec<u8>, u32, u32)> {
    let pixmap = render_pixmap(svg, scale, background)?;
    let (width, height) = (pixmap.width(), pixmap.height());

    let mut data = Vec::with_capacity(width as usize * height as usize * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    Ok((data, width, height))
}

/// Rasterize the SVG and write a PNG.
pub fn save_png(path: &Path, svg: &str, settings: &AppSettings) -> Result<()> {
    let scale = settings.font_size as f32 / BASE_EM_PX * (PNG_DPI / 96.0);
    let pixmap = render_pixmap(svg, scale, settings.background)?;

    pixmap
        .save_png(path)
        .map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}

/// Convert the SVG to a single-page PDF and write it.
pub fn save_pdf(path: &Path, svg: &str) -> Result<()> {
    let options = svg2pdf::usvg::Options::default();
    let tree = svg2pdf::usvg::Tree::from_str(svg, &options)
        .map_err(|e| AppError::Export(e.to_string()))?;

    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| AppError::Export(e.to_string()))?;

    fs::write(path, pdf)?;
    Ok(())
}
