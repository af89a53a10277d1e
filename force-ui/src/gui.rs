use force_core::Route;
use gpui::{
    App, AppContext, AnyView, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::components::{AppWindow, WindowPreferences};
use crate::views::MODAL_CONTEXT;
use crate::{CloseModal, Quit, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.bind_keys([KeyBinding::new("escape", CloseModal, Some(MODAL_CONTEXT))]);

    // Register the quit action handler
    app_cx.on_action(quit);

    // Set up the application menu with Quit
    app_cx.set_menus(vec![Menu {
        name: "Force Analytics".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the main window centred on the primary display, showing `route`.
pub fn open_main_window(
    prefs: WindowPreferences,
    route: Route,
    cx: &mut App,
) -> anyhow::Result<()> {
    let bounds = Bounds::centered(None, prefs.size, cx);
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(bounds)),
        titlebar: Some(TitlebarOptions {
            title: Some("Force Analytics".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    cx.open_window(options, |window, cx| {
        let view = cx.new(|cx| AppWindow::new(route, window, cx));
        cx.new(|cx| Root::new(AnyView::from(view), window, cx))
    })?;
    info!(width = ?prefs.size.width, height = ?prefs.size.height, "main window opened");
    Ok(())
}
