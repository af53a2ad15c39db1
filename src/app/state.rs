use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use fltk::{
    dialog,
    enums::{Color, ColorDepth},
    frame::Frame,
    image::RgbImage,
    prelude::*,
    text::TextEditor,
};

use crate::app::error::AppError;
use crate::app::export;
use crate::app::render;
use crate::app::samples::SAMPLES;
use crate::app::settings::{AppSettings, Background, SaveFormat};
use crate::ui::file_dialogs::native_save_dialog;
use crate::ui::main_window::MainWidgets;

pub struct AppState {
    pub input: TextEditor,
    pub preview_frame: Frame,
    pub settings: Rc<RefCell<AppSettings>>,
    /// Expression behind the current preview, used for equation-derived
    /// filenames.
    pub current_equation: String,
    /// SVG document behind the current preview, reused by the save paths.
    pub current_svg: Option<String>,
    /// Last directory used in a save dialog.
    pub last_save_directory: Option<String>,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: Rc<RefCell<AppSettings>>) -> Self {
        Self {
            input: widgets.input,
            preview_frame: widgets.preview_frame,
            settings,
            current_equation: String::new(),
            current_svg: None,
            last_save_directory: None,
        }
    }

    fn input_text(&self) -> String {
        self.input.buffer().map(|b| b.text()).unwrap_or_default()
    }

    /// Re-render the input expression and show it in the preview frame.
    pub fn update_preview(&mut self) {
        let text = self.input_text();
        let text = text.trim();
        if text.is_empty() {
            self.clear_preview();
            return;
        }

        let settings = self.settings.borrow().clone();
        match render::render_svg(text, &settings) {
            Ok(svg) => {
                self.current_equation = text.to_string();
                self.show_preview(&svg, &settings);
                self.current_svg = Some(svg);
            }
            Err(e) => dialog::alert_default(&format!(
                "Failed to render equation: {}\n\nInput: {}",
                e, text
            )),
        }
    }

    // MathJax SVG relies on defs/use, which FLTK's SvgImage cannot
    // resolve, so the preview goes through the resvg rasterizer.
    fn show_preview(&mut self, svg: &str, settings: &AppSettings) {
        let scale = settings.font_size as f32 / render::BASE_EM_PX;
        let image = export::rasterize_rgba(svg, scale, settings.background).and_then(
            |(data, w, h)| {
                RgbImage::new(&data, w as i32, h as i32, ColorDepth::Rgba8)
                    .map_err(|e| AppError::Export(e.to_string()))
            },
        );

        match image {
            Ok(image) => {
                self.preview_frame.set_color(match settings.background.rgb() {
                    Some((r, g, b)) => Color::from_rgb(r, g, b),
                    None => Color::BackGround,
                });
                self.preview_frame.set_image(Some(image));
                self.preview_frame.redraw();
            }
            Err(e) => dialog::alert_default(&format!("Failed to display preview: {}", e)),
        }
    }

    fn clear_preview(&mut self) {
        self.current_svg = None;
        self.preview_frame.set_image(None::<RgbImage>);
        self.preview_frame.set_color(Color::BackGround);
        self.preview_frame.redraw();
    }

    pub fn clear_input(&mut self) {
        if let Some(mut buf) = self.input.buffer() {
            buf.set_text("");
        }
        self.current_equation.clear();
        self.clear_preview();
    }

    pub fn insert_sample(&mut self, index: usize) {
        if let Some((_, tex)) = SAMPLES.get(index) {
            if let Some(mut buf) = self.input.buffer() {
                buf.set_text(tex);
            }
            self.update_preview();
        }
    }

    pub fn set_font_size(&mut self, size: u32) {
        self.settings.borrow_mut().font_size = size.clamp(12, 72);
        self.reshow();
    }

    pub fn set_background(&mut self, background: Background) {
        self.settings.borrow_mut().background = background;
        self.reshow();
    }

    pub fn set_display_style(&mut self, enabled: bool) {
        self.settings.borrow_mut().display_style = enabled;
        // The TeX string changes, so a reshow is not enough
        if self.current_svg.is_some() {
            self.update_preview();
        }
    }

    pub fn set_use_equation_filename(&mut self, enabled: bool) {
        self.settings.borrow_mut().use_equation_filename = enabled;
    }

    pub fn set_save_format(&mut self, format: SaveFormat) {
        self.settings.borrow_mut().save_format = format;
    }

    /// Redisplay the cached SVG with current scale and background.
    fn reshow(&mut self) {
        if let Some(svg) = self.current_svg.clone() {
            let settings = self.settings.borrow().clone();
            self.show_preview(&svg, &settings);
        }
    }

    pub fn save_image(&mut self, format: SaveFormat) {
        if self.current_svg.is_none() {
            self.update_preview();
        }
        let Some(svg) = self.current_svg.clone() else {
            dialog::alert_default("Nothing to save. Enter an equation first.");
            return;
        };

        let settings = self.settings.borrow().clone();
        let basename = export::default_basename(&settings, &self.current_equation);
        let default_name = format!("{}.{}", basename, format.extension());
        let pattern = format!("*.{}", format.extension());

        let Some(path) =
            native_save_dialog(&pattern, &default_name, self.last_save_directory.as_deref())
        else {
            return;
        };
        let path = ensure_extension(PathBuf::from(path), format.extension());
        if let Some(parent) = path.parent() {
            self.last_save_directory = Some(parent.to_string_lossy().to_string());
        }

        let svg = render::apply_background(&svg, settings.background);
        let result = match format {
            SaveFormat::Svg => export::save_svg(&path, &svg),
            SaveFormat::Png => export::save_png(&path, &svg, &settings),
            SaveFormat::Pdf => export::save_pdf(&path, &svg),
        };
        if let Err(e) = result {
            dialog::alert_default(&format!("Error saving file: {}", e));
        }
    }

    pub fn save_default(&mut self) {
        let format = self.settings.borrow().save_format;
        self.save_image(format);
    }

    pub fn show_about(&self) {
        dialog::message_default(&format!(
            "MathPad {}\n\nType a LaTeX equation, preview it, export it.",
            env!("CARGO_PKG_VERSION")
        ));
    }

    /// Persist settings and stop the event loop. A failed save is logged
    /// and must never keep the application from exiting.
    pub fn quit(&mut self) {
        if let Err(e) = self.settings.borrow().save() {
            eprintln!("Failed to save settings: {}", e);
        }
        fltk::app::quit();
    }
}

/// Append the export extension when the chosen path has none.
fn ensure_extension(path: PathBuf, extension: &str) -> PathBuf {
    match path.extension() {
        Some(_) => path,
        None => path.with_extension(extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_ensure_extension_appends() {
        let path = ensure_extension(PathBuf::from("/tmp/equation"), "svg");
        assert_eq!(path, Path::new("/tmp/equation.svg"));
    }

    #[test]
    fn test_ensure_extension_keeps_existing() {
        let path = ensure_extension(PathBuf::from("/tmp/equation.pdf"), "svg");
        assert_eq!(path, Path::new("/tmp/equation.pdf"));
    }
}
