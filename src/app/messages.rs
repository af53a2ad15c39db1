use crate::app::settings::{Background, SaveFormat};

/// All messages that can be sent through the FLTK channel.
/// Each widget callback sends one of these; the dispatch loop in main
/// handles them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    // Equation
    UpdatePreview,
    ClearInput,
    InsertSample(usize),

    // Options
    SetFontSize(u32),
    SetBackground(Background),
    SetDisplayStyle(bool),
    SetUseEquationFilename(bool),
    SetSaveFormat(SaveFormat),

    // Export
    SaveImage(SaveFormat),
    SaveDefault,

    // App
    ShowAbout,
    Quit,
}
