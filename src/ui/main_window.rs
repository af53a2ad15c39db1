use fltk::{
    app::Sender,
    button::{Button, CheckButton},
    enums::{Color, Font, FrameType},
    frame::Frame,
    group::Flex,
    menu::{Choice, MenuBar},
    misc::Spinner,
    prelude::*,
    text::{TextBuffer, TextEditor},
    window::Window,
};

use crate::app::messages::Message;
use crate::app::samples::SAMPLES;
use crate::app::settings::{AppSettings, Background, SaveFormat};

pub const INITIAL_EQUATION: &str = "E = mc^2";

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub input: TextEditor,
    pub fontsize_spinner: Spinner,
    pub background_choice: Choice,
    pub displaystyle_check: CheckButton,
    pub filename_check: CheckButton,
    pub format_choice: Choice,
    pub preview_frame: Frame,
}

pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1000, 700, "MathPad");
    wind.set_xclass("MathPad");

    let mut flex = Flex::new(0, 0, 1000, 700, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Equation input
    let mut input = TextEditor::new(0, 0, 0, 0, "");
    let mut input_buf = TextBuffer::default();
    input_buf.set_text(INITIAL_EQUATION);
    input.set_buffer(input_buf);
    input.set_text_font(Font::Courier);
    input.set_text_size(14);
    flex.fixed(&input, 90);

    // Preview / clear actions
    let action_row = Flex::default().row();
    let mut update_btn = Button::default().with_label("Update Preview");
    update_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::UpdatePreview)
    });
    let mut clear_btn = Button::default().with_label("Clear");
    clear_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::ClearInput)
    });
    action_row.end();
    flex.fixed(&action_row, 35);

    // Options
    let options_row = Flex::default().row();

    label_frame("Font Size:");
    let mut fontsize_spinner = Spinner::default();
    fontsize_spinner.set_range(12.0, 72.0);
    fontsize_spinner.set_step(1.0);
    fontsize_spinner.set_value(settings.font_size as f64);
    fontsize_spinner.set_callback({
        let s = *sender;
        move |sp| s.send(Message::SetFontSize(sp.value() as u32))
    });

    label_frame("Background:");
    let mut background_choice = Choice::default();
    for bg in Background::all() {
        background_choice.add_choice(bg.display_name());
    }
    background_choice.set_value(enum_index(Background::all(), &settings.background));
    background_choice.set_callback({
        let s = *sender;
        move |c| {
            if let Some(bg) = index_to_variant(Background::all(), c.value()) {
                s.send(Message::SetBackground(bg));
            }
        }
    });

    let mut displaystyle_check = CheckButton::default().with_label("Use \\displaystyle");
    displaystyle_check.set_value(settings.display_style);
    displaystyle_check.set_callback({
        let s = *sender;
        move |c| s.send(Message::SetDisplayStyle(c.value()))
    });

    let mut filename_check = CheckButton::default().with_label("Equation as filename");
    filename_check.set_value(settings.use_equation_filename);
    filename_check.set_callback({
        let s = *sender;
        move |c| s.send(Message::SetUseEquationFilename(c.value()))
    });

    label_frame("Format:");
    let mut format_choice = Choice::default();
    for format in SaveFormat::all() {
        format_choice.add_choice(format.display_name());
    }
    format_choice.set_value(enum_index(SaveFormat::all(), &settings.save_format));
    format_choice.set_callback({
        let s = *sender;
        move |c| {
            if let Some(format) = index_to_variant(SaveFormat::all(), c.value()) {
                s.send(Message::SetSaveFormat(format));
            }
        }
    });

    options_row.end();
    flex.fixed(&options_row, 30);

    // Rendered equation preview (takes the remaining space)
    let mut preview_frame = Frame::default();
    preview_frame.set_frame(FrameType::FlatBox);
    preview_frame.set_color(Color::BackGround);

    // Save actions
    let save_row = Flex::default().row();
    for format in SaveFormat::all() {
        let mut btn = Button::default().with_label(&format!("Save {}", format.display_name()));
        btn.set_callback({
            let s = *sender;
            let format = *format;
            move |_| s.send(Message::SaveImage(format))
        });
    }
    let mut save_btn = Button::default().with_label("Save...");
    save_btn.set_callback({
        let s = *sender;
        move |_| s.send(Message::SaveDefault)
    });
    save_row.end();
    flex.fixed(&save_row, 35);

    // Sample equations, two per row
    let samples_col = Flex::default().column();
    for (row_idx, pair) in SAMPLES.chunks(2).enumerate() {
        let row = Flex::default().row();
        for (col_idx, (name, _)) in pair.iter().enumerate() {
            let index = row_idx * 2 + col_idx;
            let mut btn = Button::default().with_label(name);
            btn.set_callback({
                let s = *sender;
                move |_| s.send(Message::InsertSample(index))
            });
        }
        row.end();
    }
    samples_col.end();
    flex.fixed(&samples_col, 100);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        input,
        fontsize_spinner,
        background_choice,
        displaystyle_check,
        filename_check,
        format_choice,
        preview_frame,
    }
}

fn label_frame(text: &str) {
    let mut frame = Frame::default().with_label(text);
    frame.set_align(fltk::enums::Align::Right | fltk::enums::Align::Inside);
}

fn enum_index<T: PartialEq>(all: &[T], value: &T) -> i32 {
    all.iter()
        .position(|v| v == value)
        .map(|i| i as i32)
        .unwrap_or(0)
}

fn index_to_variant<T: Copy>(all: &[T], index: i32) -> Option<T> {
    if index < 0 {
        return None;
    }
    all.get(index as usize).copied()
}
