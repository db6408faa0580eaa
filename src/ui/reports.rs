use adw::prelude::*;
use gtk4 as gtk;

use crate::catalog::{Tone, reports};
use crate::ui::widgets::{self, label};

pub fn build(overlay: &adw::ToastOverlay) -> gtk::Widget {
    let content = widgets::vbox(0);
    content.append(&widgets::banner("Blockchain Reports", Some("security-high-symbolic")));
    content.append(&ledger());
    content.append(&water_budget());
    content.append(&leaderboard());
    content.append(&downloads(overlay));
    content.append(&impact());
    widgets::scroller(&content).upcast()
}

fn ledger() -> gtk::Box {
    let card = widgets::card("Community Water Ledger", "security-high-symbolic", Tone::Blue);
    let tag = widgets::pill("BLOCKCHAIN", Tone::Green);
    tag.set_halign(gtk::Align::Start);
    card.append(&tag);
    card.append(&widgets::metric_row(&reports::LEDGER));
    card.append(&label("Recent Transactions", &["heading"]));
    for tx in &reports::TRANSACTIONS {
        card.append(&widgets::alert_row(tx));
    }
    card
}

fn water_budget() -> gtk::Box {
    let card = widgets::card("Community Water Budget", "x-office-spreadsheet-symbolic", Tone::Blue);
    let used = (reports::BUDGET_USED * 100.0).round() as u32;

    let headline = label(&format!("{used}%"), &["metric-value", Tone::Red.css_class()]);
    headline.set_xalign(0.5);
    card.append(&headline);
    let caption = label("Used", &["metric-label"]);
    caption.set_xalign(0.5);
    card.append(&caption);

    let bar = gtk::ProgressBar::new();
    bar.set_fraction(reports::BUDGET_USED);
    card.append(&bar);

    let legend = widgets::hbox(12);
    legend.set_homogeneous(true);
    legend.append(&label(&format!("Safe Limit: {}%", 100 - used), &[Tone::Green.css_class()]));
    legend.append(&label(&format!("Used: {used}%"), &[Tone::Blue.css_class()]));
    legend.append(&label("Over-extraction Risk", &[Tone::Red.css_class()]));
    card.append(&legend);

    let warning = label(reports::BUDGET_WARNING, &[]);
    warning.add_css_class(&format!("{}-soft", Tone::Orange.css_class()));
    card.append(&warning);
    card
}

fn leaderboard() -> gtk::Box {
    let card = widgets::card("Conservation Leaderboard", "starred-symbolic", Tone::Gold);
    let list = gtk::ListBox::new();
    list.set_selection_mode(gtk::SelectionMode::None);
    list.add_css_class("boxed-list");
    for village in &reports::LEADERBOARD {
        let row = gtk::ListBoxRow::new();
        let body = widgets::hbox(12);
        body.set_margin_top(8);
        body.set_margin_bottom(8);
        body.set_margin_start(8);
        body.set_margin_end(8);

        let tone = if village.is_podium() { Tone::Gold } else { Tone::Grey };
        body.append(&widgets::pill(&village.rank.to_string(), tone));

        let text = widgets::vbox(2);
        text.set_hexpand(true);
        text.append(&label(village.name, &["heading"]));
        text.append(&label(&format!("{} saved", village.savings), &["metric-label"]));
        body.append(&text);

        let score = widgets::vbox(0);
        score.append(&label(&village.score.to_string(), &["metric-value", Tone::Green.css_class()]));
        score.append(&label("Score", &["metric-label"]));
        body.append(&score);

        row.set_child(Some(&body));
        list.append(&row);
    }
    card.append(&list);
    card
}

fn downloads(overlay: &adw::ToastOverlay) -> gtk::Box {
    let card = widgets::card("Download Reports", "folder-download-symbolic", Tone::Blue);
    let list = gtk::ListBox::new();
    list.add_css_class("boxed-list");
    list.set_selection_mode(gtk::SelectionMode::None);
    for report in &reports::REPORT_TYPES {
        let row = adw::ActionRow::builder()
            .title(report.title)
            .subtitle("PDF • Updated today")
            .activatable(true)
            .build();
        row.add_prefix(&widgets::icon(report.icon, report.tone));
        row.add_suffix(&gtk::Image::from_icon_name("go-next-symbolic"));
        let overlay = overlay.clone();
        let title = report.title;
        row.connect_activated(move |_| {
            log::info!("Report requested: {title}");
            overlay.add_toast(adw::Toast::new(&format!("{title} is available in the field office portal")));
        });
        list.append(&row);
    }
    card.append(&list);
    card
}

fn impact() -> gtk::Box {
    let card = widgets::card("Overall Impact Metrics", "emblem-default-symbolic", Tone::Green);
    card.append(&widgets::metric_row(&reports::IMPACT));
    card
}
