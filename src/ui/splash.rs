use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use log::{debug, info};
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::AppSettings;
use crate::ui::widgets::{self, label};
use crate::utils::{GlibTimer, Timer};

pub fn show_splash_window(app: &Application, settings: AppSettings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("HydroSpatial + DWLR")
        .default_width(420)
        .default_height(760)
        .resizable(false)
        .build();

    let root = widgets::vbox(24);
    root.set_valign(gtk::Align::Center);
    root.set_margin_start(24);
    root.set_margin_end(24);

    let logos = widgets::hbox(16);
    logos.set_halign(gtk::Align::Center);
    for (title, subtitle) in [
        ("Government of India", "भारत सरकार"),
        ("Ministry of Jal Shakti", "जल शक्ति मंत्रालय"),
    ] {
        let logo = widgets::vbox(2);
        logo.add_css_class("card");
        let t = label(title, &["heading"]);
        t.set_xalign(0.5);
        let s = label(subtitle, &["metric-label"]);
        s.set_xalign(0.5);
        logo.append(&t);
        logo.append(&s);
        logos.append(&logo);
    }
    root.append(&logos);

    let status = adw::StatusPage::builder()
        .icon_name("weather-showers-symbolic")
        .title("HydroSpatial + DWLR")
        .description("Real-time Groundwater Resource Evaluation\n\nEmpowering communities with AI-driven water management")
        .build();
    root.append(&status);

    let spinner = gtk::Spinner::new();
    spinner.start();
    root.append(&spinner);
    let loading = label("Loading water data…", &["metric-label"]);
    loading.set_xalign(0.5);
    root.append(&loading);

    window.set_content(Some(&root));
    window.present();

    let timer = GlibTimer;
    let pending: Rc<RefCell<Option<<GlibTimer as Timer>::Handle>>> = Rc::new(RefCell::new(None));
    let handle = {
        let app = app.clone();
        let window = window.clone();
        let pending = pending.clone();
        timer.start(
            settings.splash_duration(),
            Box::new(move || {
                pending.borrow_mut().take();
                info!("Splash finished");
                crate::app::show_entry(&app, &settings);
                window.close();
            }),
        )
    };
    *pending.borrow_mut() = Some(handle);

    window.connect_close_request(move |_| cancel_transition(&timer, &pending));
}

/// Stops the splash timer if it has not fired yet. The window always closes.
fn cancel_transition<T: Timer>(
    timer: &T,
    pending: &RefCell<Option<T::Handle>>,
) -> gtk::glib::Propagation {
    let handle = pending.borrow_mut().take();
    if let Some(handle) = handle {
        debug!("Splash closed early, cancelling transition");
        timer.stop(handle);
    }
    gtk::glib::Propagation::Proceed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::testing::ManualTimer;
    use std::cell::Cell;
    use std::time::Duration;

    #[test]
    fn early_close_stops_the_pending_transition_once() {
        let timer = ManualTimer::default();
        let moved_on = Rc::new(Cell::new(false));
        let handle = {
            let moved_on = moved_on.clone();
            timer.start(Duration::from_secs(3), Box::new(move || moved_on.set(true)))
        };
        let pending = RefCell::new(Some(handle));

        assert_eq!(cancel_transition(&timer, &pending), gtk::glib::Propagation::Proceed);
        assert!(pending.borrow().is_none());
        assert_eq!(*timer.stopped.borrow(), vec![handle]);

        assert_eq!(cancel_transition(&timer, &pending), gtk::glib::Propagation::Proceed);
        assert_eq!(timer.stopped.borrow().len(), 1);

        timer.fire_all();
        assert!(!moved_on.get());
    }

    #[test]
    fn close_after_transition_has_nothing_to_stop() {
        let timer = ManualTimer::default();
        let pending: RefCell<Option<usize>> = RefCell::new(None);
        assert_eq!(cancel_transition(&timer, &pending), gtk::glib::Propagation::Proceed);
        assert!(timer.stopped.borrow().is_empty());
    }
}
