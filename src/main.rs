use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};

use math_pad::app::messages::Message;
use math_pad::app::settings::AppSettings;
use math_pad::app::state::AppState;
use math_pad::ui::main_window::build_main_window;
use math_pad::ui::menu::build_menu;

fn main() {
    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let settings = Rc::new(RefCell::new(AppSettings::load()));

    let mut widgets = build_main_window(&settings.borrow(), &sender);
    build_menu(&mut widgets.menu, &sender);

    // Closing the window behaves like File/Quit so settings still persist
    widgets.wind.set_callback({
        let s = sender;
        move |_| s.send(Message::Quit)
    });
    widgets.wind.show();

    let mut state = AppState::new(widgets, settings);
    state.update_preview(); // render the pre-filled expression

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::UpdatePreview => state.update_preview(),
                Message::ClearInput => state.clear_input(),
                Message::InsertSample(index) => state.insert_sample(index),
                Message::SetFontSize(size) => state.set_font_size(size),
                Message::SetBackground(bg) => state.set_background(bg),
                Message::SetDisplayStyle(on) => state.set_display_style(on),
                Message::SetUseEquationFilename(on) => state.set_use_equation_filename(on),
                Message::SetSaveFormat(format) => state.set_save_format(format),
                Message::SaveImage(format) => state.save_image(format),
                Message::SaveDefault => state.save_default(),
                Message::ShowAbout => state.show_about(),
                Message::Quit => state.quit(),
            }
        }
    }
}
