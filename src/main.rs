use fltk::{
    app,
    enums::{Event, Key},
    prelude::*,
};

use escriba::app::messages::Message;
use escriba::app::state::AppState;
use escriba::ui::dialogs::about::{show_about_dialog, show_team_dialog};
use escriba::ui::dialogs::search::prompt_search_term;
use escriba::ui::main_window::build_main_window;
use escriba::ui::menu::build_menu;

fn main() {
    env_logger::init();

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window();
    build_menu(&mut widgets.menu, &sender);

    // Route Ctrl+Z / Ctrl+Shift+Z through the explicit edit history
    // instead of the text widget's built-in key bindings.
    {
        let s = sender;
        widgets.text_editor.handle(move |_, ev| match ev {
            Event::KeyDown if app::is_event_ctrl() && app::event_key() == Key::from_char('z') => {
                if app::is_event_shift() {
                    s.send(Message::EditRedo);
                } else {
                    s.send(Message::EditUndo);
                }
                true
            }
            _ => false,
        });
    }

    // The window close button behaves like File/Quit, including the
    // unsaved-changes prompt.
    {
        let s = sender;
        widgets.wind.set_callback(move |_| {
            if app::event() == Event::Close {
                s.send(Message::WindowClose);
            }
        });
    }

    widgets.wind.end();
    widgets.wind.show();

    let mut state = AppState::new(widgets.text_editor, widgets.wind);

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::FileOpen => state.file_open(),
                Message::FileSave => state.file_save(),
                Message::FileSaveAs => state.file_save_as(),
                Message::FileQuit | Message::WindowClose => state.request_quit(),
                Message::EditUndo => state.edit_undo(),
                Message::EditRedo => state.edit_redo(),
                Message::ShowSearch => {
                    if let Some(term) = prompt_search_term() {
                        state.search_for(&term);
                    }
                }
                Message::ShowAbout => show_about_dialog(),
                Message::ShowTeam => show_team_dialog(),
            }
        }
    }
}
