use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    enums::CallbackTrigger,
    frame::Frame,
    input::Input,
    prelude::*,
    window::Window,
};

use super::run_dialog;

/// Prompt for a search term with a modal input dialog.
///
/// Returns None when the user cancels or confirms an empty term; either
/// way no search is performed.
pub fn prompt_search_term() -> Option<String> {
    let mut dialog_win = Window::default()
        .with_size(320, 120)
        .with_label("Search")
        .center_screen();
    dialog_win.make_modal(true);

    Frame::default().with_pos(20, 20).with_size(90, 30).with_label("Search for:");
    let mut term_input = Input::default().with_pos(110, 20).with_size(190, 30);

    let mut search_btn = Button::default()
        .with_pos(120, 70).with_size(90, 30).with_label("Search");
    let mut cancel_btn = Button::default()
        .with_pos(220, 70).with_size(80, 30).with_label("Cancel");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let result: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    let res = result.clone();
    let term_input_ok = term_input.clone();
    let dialog_ok = dialog_win.clone();
    search_btn.set_callback(move |_| {
        let term = term_input_ok.value();
        if !term.is_empty() {
            *res.borrow_mut() = Some(term);
        }
        dialog_ok.clone().hide();
    });

    // Enter key on the input triggers Search
    let mut search_btn2 = search_btn.clone();
    term_input.set_trigger(CallbackTrigger::EnterKey);
    term_input.set_callback(move |_| {
        search_btn2.do_callback();
    });

    let dialog_close = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });

    run_dialog(&dialog_win);

    let term = result.borrow_mut().take();
    term
}
