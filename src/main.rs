mod app;
mod catalog;
mod chat;
mod error;
mod onboarding;
mod ui;
mod utils;

use adw::prelude::*;
use adw::Application;

fn main() -> adw::glib::ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let app = Application::builder()
        .application_id("in.gov.jalshakti.HydroSpatial")
        .build();
    app.connect_activate(|app| {
        crate::app::build_ui(app);
    });
    app.run()
}
