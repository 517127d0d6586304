use fltk::{
    group::Flex,
    menu::MenuBar,
    prelude::*,
    text::TextEditor,
    window::Window,
};

use crate::app::state::WINDOW_TITLE;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
}

pub fn build_main_window() -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, WINDOW_TITLE);
    wind.set_xclass("Escriba");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Buffer and highlight data are bound by AppState::new.
    let text_editor = TextEditor::new(0, 0, 0, 0, "");

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
    }
}
