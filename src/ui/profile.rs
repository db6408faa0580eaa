use adw::prelude::*;
use gtk4 as gtk;
use log::info;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::Language;
use crate::catalog::{Tone, profile};
use crate::ui::widgets::{self, label};

/// Quick-settings state owned by the profile tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileState {
    pub notifications_enabled: bool,
    pub location_enabled: bool,
    pub language: Language,
}

impl ProfileState {
    pub fn new(language: Language) -> Self {
        Self {
            notifications_enabled: true,
            location_enabled: true,
            language,
        }
    }

    pub fn cycle_language(&mut self) -> Language {
        self.language = self.language.next();
        self.language
    }
}

pub fn build(overlay: &adw::ToastOverlay, language: Language) -> gtk::Widget {
    let state = Rc::new(RefCell::new(ProfileState::new(language)));

    let content = widgets::vbox(0);
    content.append(&widgets::banner("Profile & Settings", Some("avatar-default-symbolic")));
    content.append(&user_card());
    content.append(&contact_card());
    content.append(&impact_card());
    content.append(&quick_settings(&state));
    content.append(&menu(overlay));
    content.append(&app_info());

    let sign_out = gtk::Button::with_label("Sign Out");
    sign_out.add_css_class("destructive-action");
    sign_out.set_margin_start(16);
    sign_out.set_margin_end(16);
    sign_out.set_margin_top(8);
    {
        let overlay = overlay.clone();
        sign_out.connect_clicked(move |_| {
            overlay.add_toast(adw::Toast::new("Signed out of the demo profile"));
        });
    }
    content.append(&sign_out);

    let branding = widgets::vbox(8);
    branding.set_margin_top(16);
    let powered = label("Powered by Digital India Initiative", &["metric-label"]);
    powered.set_xalign(0.5);
    branding.append(&powered);
    let badges = widgets::gov_badges(true);
    badges.set_halign(gtk::Align::Center);
    branding.append(&badges);
    content.append(&branding);

    widgets::scroller(&content).upcast()
}

fn user_card() -> gtk::Box {
    let card = widgets::hbox(12);
    card.add_css_class("card");
    card.set_margin_start(16);
    card.set_margin_end(16);
    card.set_margin_top(8);

    let avatar = adw::Avatar::new(56, Some(profile::NAME), true);
    card.append(&avatar);

    let text = widgets::vbox(2);
    text.set_hexpand(true);
    text.append(&label(profile::NAME, &["title-4"]));
    text.append(&label(profile::ROLE, &["metric-label"]));
    let place = widgets::hbox(4);
    place.append(&widgets::icon("mark-location-symbolic", Tone::Grey));
    place.append(&label(profile::LOCATION, &["metric-label"]));
    text.append(&place);
    card.append(&text);

    card.append(&widgets::icon("emblem-system-symbolic", Tone::Blue));
    card
}

fn contact_card() -> gtk::Box {
    let card = widgets::card("Contact Information", "contact-new-symbolic", Tone::Grey);
    for (icon_name, value) in [("call-start-symbolic", profile::PHONE), ("mail-unread-symbolic", profile::EMAIL)] {
        let row = widgets::hbox(8);
        row.append(&widgets::icon(icon_name, Tone::Grey));
        row.append(&label(value, &[]));
        card.append(&row);
    }
    card
}

fn impact_card() -> gtk::Box {
    let card = widgets::card("Your Impact", "starred-symbolic", Tone::Gold);
    card.append(&widgets::metric_row(&profile::STATS));
    card
}

fn switch_row(title: &str, subtitle: &str, active: bool) -> (adw::ActionRow, gtk::Switch) {
    let switch = gtk::Switch::new();
    switch.set_active(active);
    switch.set_valign(gtk::Align::Center);
    let row = adw::ActionRow::builder().title(title).subtitle(subtitle).build();
    row.add_suffix(&switch);
    row.set_activatable_widget(Some(&switch));
    (row, switch)
}

fn quick_settings(state: &Rc<RefCell<ProfileState>>) -> gtk::Box {
    let card = widgets::card("Quick Settings", "preferences-system-symbolic", Tone::Blue);
    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_selection_mode(gtk::SelectionMode::None);

    let current = *state.borrow();

    let (row, switch) = switch_row(
        "Push Notifications",
        "Water alerts, forecasts",
        current.notifications_enabled,
    );
    {
        let state = state.clone();
        switch.connect_active_notify(move |sw| {
            state.borrow_mut().notifications_enabled = sw.is_active();
            info!("Notifications {}", if sw.is_active() { "enabled" } else { "disabled" });
        });
    }
    list.append(&row);

    let (row, switch) = switch_row(
        "Location Services",
        "Local water data access",
        current.location_enabled,
    );
    {
        let state = state.clone();
        switch.connect_active_notify(move |sw| {
            state.borrow_mut().location_enabled = sw.is_active();
            info!("Location services {}", if sw.is_active() { "enabled" } else { "disabled" });
        });
    }
    list.append(&row);

    let language_row = adw::ActionRow::builder()
        .title("Language")
        .subtitle(current.language.label())
        .activatable(true)
        .build();
    language_row.add_suffix(&gtk::Image::from_icon_name("go-next-symbolic"));
    {
        let state = state.clone();
        language_row.connect_activated(move |row| {
            let language = state.borrow_mut().cycle_language();
            row.set_subtitle(language.label());
            info!("Language set to {}", language.label());
        });
    }
    list.append(&language_row);

    card.append(&list);
    card
}

fn menu(overlay: &adw::ToastOverlay) -> gtk::Box {
    let card = widgets::card("Settings & Support", "emblem-system-symbolic", Tone::Blue);
    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_selection_mode(gtk::SelectionMode::None);
    for item in &profile::MENU {
        let row = adw::ActionRow::builder()
            .title(item.title)
            .subtitle(item.subtitle)
            .activatable(true)
            .build();
        row.add_prefix(&widgets::icon(item.icon, Tone::Blue));
        row.add_suffix(&gtk::Image::from_icon_name("go-next-symbolic"));
        let overlay = overlay.clone();
        let title = item.title;
        row.connect_activated(move |_| {
            overlay.add_toast(adw::Toast::new(&format!("{title} is managed by your field office")));
        });
        list.append(&row);
    }
    card.append(&list);
    card
}

fn app_info() -> gtk::Box {
    let card = widgets::card("App Information", "help-about-symbolic", Tone::Blue);
    for (i, line) in profile::APP_INFO.iter().enumerate() {
        let classes: &[&str] = if i == 0 { &["heading"] } else { &["metric-label"] };
        card.append(&label(line, classes));
    }
    card
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_start_enabled() {
        let state = ProfileState::new(Language::Hindi);
        assert!(state.notifications_enabled);
        assert!(state.location_enabled);
        assert_eq!(state.language, Language::Hindi);
    }

    #[test]
    fn language_selection_cycles() {
        let mut state = ProfileState::new(Language::English);
        assert_eq!(state.cycle_language(), Language::Hindi);
        assert_eq!(state.cycle_language(), Language::Regional);
        assert_eq!(state.cycle_language(), Language::English);
    }
}
