//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};
use tracing::{error, info};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::state::settings::CatalogSettings;

actions!(block_catalog, [Quit]);

/// Run the catalog application
pub fn run_app(settings: CatalogSettings) {
    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        gpui_component::init(cx);

        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let (width, height) = settings.window_size();
        let start_block = settings.last_block;

        // Initialize global entities
        let entities = AppEntities::init(settings, cx);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(width), px(height)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Block Catalog")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        let opened = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        });

        match opened {
            Ok(_) => info!(block = start_block.slug(), "Catalog window opened"),
            Err(e) => {
                error!(error = %e, "Failed to open catalog window");
                cx.quit();
                return;
            }
        }

        cx.activate(true);
    });
}
