use fltk::dialog::{FileDialogOptions, FileDialogType, NativeFileChooser};

/// Ask the user where to save an export. Returns the chosen path, or
/// None if the dialog was cancelled.
pub fn native_save_dialog(
    filter: &str,
    default_name: &str,
    directory: Option<&str>,
) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(filter);
    nfc.set_option(FileDialogOptions::SaveAsConfirm | FileDialogOptions::UseFilterExt);
    if let Some(dir) = directory {
        let _ = nfc.set_directory(&dir);
    }
    nfc.set_preset_file(default_name);
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
