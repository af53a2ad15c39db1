use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::messages::Message;
use crate::app::settings::SaveFormat;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>) {
    let s = sender;

    // File
    menu.add("File/Save As...", Shortcut::Ctrl | 's', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveDefault) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Equation
    menu.add("Equation/Update Preview", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::UpdatePreview) });
    menu.add("Equation/Clear", Shortcut::Ctrl | 'l', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ClearInput) });

    // Export
    menu.add("Export/As SVG...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveImage(SaveFormat::Svg)) });
    menu.add("Export/As PNG...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveImage(SaveFormat::Png)) });
    menu.add("Export/As PDF...", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::SaveImage(SaveFormat::Pdf)) });

    // Help
    menu.add("Help/About MathPad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
