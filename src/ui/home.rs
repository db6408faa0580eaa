use gtk4 as gtk;
use gtk4::prelude::*;

use crate::catalog::{Tone, home};
use crate::ui::widgets::{self, label};

pub fn build() -> gtk::Widget {
    let content = widgets::vbox(0);

    let header = widgets::vbox(4);
    header.add_css_class("banner");
    header.append(&widgets::gov_badges(false));
    header.append(&label("HydroSpatial + DWLR", &["title-2"]));
    header.append(&label("Real-time Groundwater Resource Evaluation", &["dim"]));
    content.append(&header);

    content.append(&station_map());
    content.append(&groundwater_status());
    content.append(&quick_access());
    content.append(&recent_alerts());

    widgets::scroller(&content).upcast()
}

fn station_map() -> gtk::Box {
    let card = widgets::card("India DWLR Stations", "mark-location-symbolic", Tone::Blue);
    let map = widgets::vbox(8);
    map.add_css_class(&format!("{}-soft", Tone::Blue.css_class()));
    map.set_size_request(-1, 200);
    map.set_valign(gtk::Align::Fill);

    let title = label("Interactive Map of India", &["heading"]);
    title.set_xalign(0.5);
    let subtitle = label(home::ACTIVE_STATIONS, &["metric-label"]);
    subtitle.set_xalign(0.5);
    map.append(&title);
    map.append(&subtitle);

    let legend = widgets::hbox(16);
    legend.set_halign(gtk::Align::Center);
    for status in &home::STATION_STATUS {
        let item = widgets::hbox(4);
        let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        dot.add_css_class("dot");
        dot.add_css_class(&format!("{}-fill", status.tone.css_class()));
        dot.set_valign(gtk::Align::Center);
        item.append(&dot);
        item.append(&label(&format!("{}: {}", status.label, status.value), &[]));
        legend.append(&item);
    }
    map.append(&legend);
    card.append(&map);
    card
}

fn groundwater_status() -> gtk::Box {
    let card = widgets::card("Real-time Groundwater Status", "weather-showers-symbolic", Tone::Blue);
    card.append(&widgets::metric_row(&home::GROUNDWATER));

    card.append(&label("6-Month Trend", &["metric-label"]));
    let bars = widgets::hbox(8);
    bars.set_homogeneous(true);
    bars.set_size_request(-1, 90);
    for height in home::TREND {
        let bar = gtk::LevelBar::for_interval(0.0, 100.0);
        bar.set_orientation(gtk::Orientation::Vertical);
        bar.set_inverted(true);
        bar.set_value(f64::from(height));
        bar.add_css_class("trend-bar");
        bars.append(&bar);
    }
    card.append(&bars);
    card
}

fn quick_access() -> gtk::Box {
    let section = widgets::vbox(8);
    section.set_margin_start(16);
    section.set_margin_end(16);
    section.set_margin_top(8);
    section.append(&label("Quick Access", &["title-4"]));

    let grid = gtk::Grid::builder()
        .row_spacing(12)
        .column_spacing(12)
        .column_homogeneous(true)
        .build();
    for (i, tile) in home::QUICK_ACCESS.iter().enumerate() {
        let body = widgets::vbox(6);
        let img = widgets::icon(tile.icon, tile.tone);
        img.set_pixel_size(24);
        img.add_css_class(&format!("{}-soft", tile.tone.css_class()));
        body.append(&img);
        let caption = label(tile.title, &[]);
        caption.set_xalign(0.5);
        caption.set_justify(gtk::Justification::Center);
        body.append(&caption);

        let button = gtk::Button::builder().child(&body).build();
        button.add_css_class("card");
        let title = tile.title;
        button.connect_clicked(move |_| log::debug!("Quick access tapped: {title}"));
        grid.attach(&button, (i % 3) as i32, (i / 3) as i32, 1, 1);
    }
    section.append(&grid);
    section
}

fn recent_alerts() -> gtk::Box {
    let section = widgets::vbox(8);
    section.set_margin_start(16);
    section.set_margin_end(16);
    section.set_margin_top(8);
    section.append(&label("Recent Alerts", &["title-4"]));
    for alert in &home::ALERTS {
        let row = widgets::alert_row(alert);
        row.add_css_class("card");
        section.append(&row);
    }
    section
}
