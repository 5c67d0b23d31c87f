//! Standalone demo: opens a window with the channel panel.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsv_panel::hsv_panel;

fn main() {
    floem::Application::new()
        .window(
            move |_| {
                hsv_panel().on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((360.0, 420.0))
                    .title("floem-hsv-panel"),
            ),
        )
        .run();
}
