//! Key bindings for the console editor.

use reedline::{
    Emacs, KeyCode, KeyModifiers, Keybindings, ReedlineEvent, default_emacs_keybindings,
};

/// Name of the completion menu the Tab binding opens.
pub const COMPLETION_MENU: &str = "completion_menu";

/// Emacs bindings with Tab opening the completion menu.
pub fn console_keybindings() -> Keybindings {
    let mut keybindings = default_emacs_keybindings();
    add_completion_keybinding(&mut keybindings);
    keybindings
}

/// Bind Tab to open the completion menu, or cycle it when already open.
pub fn add_completion_keybinding(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::UntilFound(vec![
            ReedlineEvent::Menu(COMPLETION_MENU.to_string()),
            ReedlineEvent::MenuNext,
        ]),
    );
}

/// Emacs edit mode using [`console_keybindings`].
pub fn edit_mode() -> Box<Emacs> {
    Box::new(Emacs::new(console_keybindings()))
}
