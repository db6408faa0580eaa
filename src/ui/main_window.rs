use adw::prelude::*;
use adw::Application;
use log::info;

use crate::app::AppSettings;

pub fn show_main_window(app: &Application, settings: &AppSettings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("HydroSpatial + DWLR")
        .default_width(420)
        .default_height(760)
        .build();

    let overlay = adw::ToastOverlay::new();

    let stack = adw::ViewStack::new();
    stack.set_vexpand(true);
    let tabs = [
        ("home", "Home", "go-home-symbolic", crate::ui::home::build()),
        ("insights", "Insights", "applications-science-symbolic", crate::ui::insights::build()),
        (
            "chatbot",
            "Assistant",
            "user-available-symbolic",
            crate::ui::chat_view::ChatView::new(settings.reply_delay()),
        ),
        ("reports", "Reports", "x-office-document-symbolic", crate::ui::reports::build(&overlay)),
        (
            "profile",
            "Profile",
            "avatar-default-symbolic",
            crate::ui::profile::build(&overlay, settings.language),
        ),
    ];
    for (name, title, icon, child) in tabs {
        let page = stack.add_titled(&child, Some(name), title);
        page.set_icon_name(Some(icon));
    }
    stack.connect_visible_child_name_notify(|stack| {
        if let Some(name) = stack.visible_child_name() {
            info!("Switched to {name} tab");
        }
    });

    overlay.set_child(Some(&stack));

    let switcher = adw::ViewSwitcherBar::builder()
        .stack(&stack)
        .reveal(true)
        .build();

    let container = gtk4::Box::new(gtk4::Orientation::Vertical, 0);
    let header = adw::HeaderBar::new();
    let title = gtk4::Label::new(Some("HydroSpatial + DWLR"));
    header.set_title_widget(Some(&title));
    container.append(&header);
    container.append(&overlay);
    container.append(&switcher);
    window.set_content(Some(&container));
    window.present();
    info!("Main window shown");
}
