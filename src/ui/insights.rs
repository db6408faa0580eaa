use adw::prelude::*;
use gtk4 as gtk;

use crate::catalog::{Tone, insights};
use crate::ui::widgets::{self, label};

pub fn build() -> gtk::Widget {
    let content = widgets::vbox(0);
    content.append(&widgets::banner("AI-Powered Insights", Some("applications-science-symbolic")));
    content.append(&demand_vs_supply());
    content.append(&aquifer_health());
    content.append(&climate_resilience());
    content.append(&recharge_zones());
    content.append(&sustainability());
    widgets::scroller(&content).upcast()
}

fn demand_vs_supply() -> gtk::Box {
    let card = widgets::card("Demand vs Supply Analysis", "go-up-symbolic", Tone::Blue);
    let row = widgets::hbox(8);
    row.append(&widgets::metric_tile(&insights::DEMAND));
    let vs = label("vs", &["metric-label"]);
    vs.set_valign(gtk::Align::Center);
    row.append(&vs);
    row.append(&widgets::metric_tile(&insights::SUPPLY));
    card.append(&row);

    let note = widgets::hbox(8);
    note.add_css_class(&format!("{}-soft", Tone::Blue.css_class()));
    note.append(&widgets::icon("applications-science-symbolic", Tone::Blue));
    note.append(&label(insights::RECOMMENDATION, &[]));
    card.append(&note);
    card
}

fn aquifer_health() -> gtk::Box {
    let card = widgets::card("Aquifer Health Cards", "emblem-favorite-symbolic", Tone::Blue);
    for (region, grade) in insights::AQUIFERS {
        let row = widgets::hbox(12);
        let text = widgets::vbox(2);
        text.set_hexpand(true);
        text.append(&label(region, &["heading"]));
        text.append(&label(grade.status(), &[grade.tone().css_class()]));
        row.append(&text);

        let badge = widgets::pill(grade.letter(), grade.tone());
        badge.add_css_class("title-4");
        row.append(&badge);
        card.append(&row);
    }
    card
}

fn climate_resilience() -> gtk::Box {
    let card = widgets::card("Climate Resilience Insights", "weather-showers-symbolic", Tone::Blue);
    let row = widgets::hbox(8);
    row.set_homogeneous(true);
    for (metric, icon_name) in &insights::CLIMATE {
        let tile = widgets::metric_tile(metric);
        tile.prepend(&widgets::icon(icon_name, metric.tone));
        row.append(&tile);
    }
    card.append(&row);
    card.append(&label(insights::CLIMATE_NOTE, &["metric-label"]));
    card
}

fn recharge_zones() -> gtk::Box {
    let card = widgets::card("Recharge Zone Suggestions", "mark-location-symbolic", Tone::Blue);
    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_selection_mode(gtk::SelectionMode::None);
    for zone in &insights::RECHARGE_ZONES {
        let row = adw::ActionRow::builder()
            .title(zone.location)
            .subtitle(format!("+{} recharge improvement", zone.improvement))
            .activatable(true)
            .build();
        row.add_suffix(&widgets::pill(zone.potential(), zone.tone()));
        row.add_suffix(&gtk::Image::from_icon_name("go-next-symbolic"));
        let location = zone.location;
        row.connect_activated(move |_| log::debug!("Recharge zone selected: {location}"));
        list.append(&row);
    }
    card.append(&list);
    card
}

fn sustainability() -> gtk::Box {
    let card = widgets::card("Sustainability Impact", "emblem-default-symbolic", Tone::Green);
    let row = widgets::hbox(8);
    row.set_homogeneous(true);
    for (metric, detail) in &insights::SUSTAINABILITY {
        let tile = widgets::metric_tile(metric);
        let caption = label(detail, &["metric-label"]);
        caption.set_xalign(0.5);
        tile.append(&caption);
        row.append(&tile);
    }
    card.append(&row);

    card.append(&label("Contributing to UN SDGs:", &["heading"]));
    let tags = widgets::hbox(8);
    for sdg in insights::SDGS {
        tags.append(&widgets::pill(sdg, Tone::Blue));
    }
    card.append(&tags);
    card
}
