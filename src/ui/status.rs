use crate::app::Model;

/// Lines shown on the help screen.
pub const HELP_TEXT: &[&str] = &[
    "textpad keys",
    "",
    "  Arrows      move the cursor",
    "  Enter       split the line at the cursor",
    "  Backspace   delete the character before the cursor",
    "  Delete      delete the character under the cursor",
    "  Ctrl+W      save and quit",
    "  Ctrl+C      quit without saving (also Ctrl+Q)",
    "  Ctrl+G      close this help (also F1)",
];

pub fn status_text(model: &Model) -> String {
    let filename = model.file_name.as_deref().unwrap_or("untitled");
    let help_hint = if model.help_visible() {
        "^G:back"
    } else {
        "^G:help"
    };
    let status = format!(" {filename}  {help_hint}  ^W:save+quit  ^C:quit");
    if !model.debug {
        return status;
    }

    let cursor = &model.cursor;
    let window = &model.window;
    let frame_info = model
        .frame_ms
        .map_or_else(String::new, |ms| format!("  frame {ms:.2}ms"));
    format!(
        "{status}  | Ln {}, Col {} (hint {})  win {},{} {}x{}{frame_info}",
        cursor.row() + 1,
        cursor.col() + 1,
        cursor.col_hint() + 1,
        window.row(),
        window.col(),
        window.n_rows(),
        window.n_cols(),
    )
}
