use gtk4 as gtk;
use gtk4::prelude::*;
use log::warn;

use crate::catalog::{Metric, Tone};

const BASE_CSS: &str = r#"
.banner {
    background-color: #1976D2;
    color: #ffffff;
    padding: 16px 20px;
}
.banner .dim { color: rgba(255, 255, 255, 0.9); }
.badge {
    background-color: rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    padding: 4px 10px;
    font-size: 11px;
    font-weight: bold;
}
.badge.solid { background-color: #1976D2; color: #ffffff; }
.card { padding: 16px; }
.metric-value { font-size: 20px; font-weight: bold; }
.metric-label { font-size: 12px; color: #666666; }
.pill {
    border-radius: 10px;
    padding: 2px 10px;
    color: #ffffff;
    font-size: 11px;
    font-weight: bold;
}
.bubble { border-radius: 16px; padding: 10px 14px; }
.bubble.user { background-color: #1976D2; color: #ffffff; }
.bubble.assistant { background-color: #ffffff; color: #333333; }
.bubble .time { font-size: 10px; opacity: 0.7; }
.dot { min-height: 8px; min-width: 8px; border-radius: 4px; background-color: #e0e0e0; }
.dot.current { min-width: 24px; }
.trend-bar block.filled { background-color: #1976D2; }
.hint { font-size: 11px; color: #666666; }
"#;

fn tone_css() -> String {
    Tone::ALL
        .iter()
        .map(|tone| {
            let class = tone.css_class();
            let hex = tone.hex();
            format!(
                ".{class} {{ color: {hex}; }}\n\
                 .{class}-bg {{ background-color: {hex}; color: #ffffff; }}\n\
                 .{class}-soft {{ background-color: alpha({hex}, 0.15); border-radius: 12px; padding: 10px; }}\n\
                 .dot.{class}-fill {{ background-color: {hex}; }}\n"
            )
        })
        .collect()
}

pub fn install_css() {
    let Some(display) = gtk::gdk::Display::default() else {
        warn!("No display available, skipping stylesheet");
        return;
    };
    let provider = gtk::CssProvider::new();
    provider.load_from_data(&format!("{BASE_CSS}{}", tone_css()));
    gtk::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

pub fn label(text: &str, classes: &[&str]) -> gtk::Label {
    let lbl = gtk::Label::new(Some(text));
    lbl.set_wrap(true);
    lbl.set_xalign(0.0);
    for class in classes {
        lbl.add_css_class(class);
    }
    lbl
}

pub fn icon(name: &str, tone: Tone) -> gtk::Image {
    let img = gtk::Image::from_icon_name(name);
    img.add_css_class(tone.css_class());
    img
}

pub fn vbox(spacing: i32) -> gtk::Box {
    gtk::Box::new(gtk::Orientation::Vertical, spacing)
}

pub fn hbox(spacing: i32) -> gtk::Box {
    gtk::Box::new(gtk::Orientation::Horizontal, spacing)
}

pub fn clear(container: &gtk::Box) {
    while let Some(child) = container.first_child() {
        container.remove(&child);
    }
}

/// Rounded card with an icon + title header; callers append the body.
pub fn card(title: &str, icon_name: &str, tone: Tone) -> gtk::Box {
    let root = vbox(12);
    root.add_css_class("card");
    root.set_margin_start(16);
    root.set_margin_end(16);
    root.set_margin_top(8);
    root.set_margin_bottom(8);

    let header = hbox(8);
    header.append(&icon(icon_name, tone));
    header.append(&label(title, &["heading"]));
    root.append(&header);
    root
}

pub fn metric_tile(metric: &Metric) -> gtk::Box {
    let tile = vbox(2);
    tile.set_hexpand(true);
    let value = label(metric.value, &["metric-value", metric.tone.css_class()]);
    value.set_xalign(0.5);
    let caption = label(metric.label, &["metric-label"]);
    caption.set_xalign(0.5);
    tile.append(&value);
    tile.append(&caption);
    tile
}

pub fn metric_row(metrics: &[Metric]) -> gtk::Box {
    let row = hbox(8);
    row.set_homogeneous(true);
    for metric in metrics {
        row.append(&metric_tile(metric));
    }
    row
}

pub fn pill(text: &str, tone: Tone) -> gtk::Label {
    let lbl = gtk::Label::new(Some(text));
    lbl.add_css_class("pill");
    lbl.add_css_class(&format!("{}-bg", tone.css_class()));
    lbl.set_valign(gtk::Align::Center);
    lbl
}

pub fn gov_badges(solid: bool) -> gtk::Box {
    let row = hbox(12);
    for text in ["GOI", "जल शक्ति"] {
        let badge = gtk::Label::new(Some(text));
        badge.add_css_class("badge");
        if solid {
            badge.add_css_class("solid");
        }
        row.append(&badge);
    }
    row
}

/// Blue title strip at the top of each tab.
pub fn banner(title: &str, icon_name: Option<&str>) -> gtk::Box {
    let root = hbox(12);
    root.add_css_class("banner");
    if let Some(name) = icon_name {
        let img = gtk::Image::from_icon_name(name);
        img.set_pixel_size(24);
        root.append(&img);
    }
    root.append(&label(title, &["title-3"]));
    root
}

/// Vertical scroller wrapping a tab's content.
pub fn scroller(content: &gtk::Box) -> gtk::ScrolledWindow {
    let scroller = gtk::ScrolledWindow::builder()
        .vexpand(true)
        .hexpand(true)
        .hscrollbar_policy(gtk::PolicyType::Never)
        .build();
    content.set_margin_bottom(16);
    scroller.set_child(Some(content));
    scroller
}

/// Dot + title/text/when block used for alerts and ledger entries.
pub fn alert_row(alert: &crate::catalog::Alert) -> gtk::Box {
    let row = hbox(12);
    let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    dot.add_css_class("dot");
    dot.add_css_class(&format!("{}-fill", alert.tone.css_class()));
    dot.set_valign(gtk::Align::Start);
    dot.set_margin_top(6);
    row.append(&dot);

    let text = vbox(2);
    text.set_hexpand(true);
    text.append(&label(alert.title, &["heading"]));
    text.append(&label(alert.text, &[]));
    text.append(&label(alert.when, &["metric-label"]));
    row.append(&text);
    row
}
