use adw::prelude::*;
use adw::Application;
use gtk4 as gtk;
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::AppSettings;
use crate::onboarding::{Navigator, OnboardingSlide, SlideExtra};
use crate::ui::widgets::{self, label};

pub fn show_onboarding_window(app: &Application, settings: AppSettings) {
    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Welcome")
        .default_width(420)
        .default_height(760)
        .build();

    let container = widgets::vbox(0);
    let header = adw::HeaderBar::new();
    header.pack_start(&widgets::gov_badges(true));
    let skip_btn = gtk::Button::with_label("Skip");
    skip_btn.add_css_class("flat");
    header.pack_end(&skip_btn);
    container.append(&header);

    let dots = widgets::hbox(8);
    dots.set_halign(gtk::Align::Center);
    dots.set_margin_top(16);
    dots.set_margin_bottom(16);
    container.append(&dots);

    let slide_box = widgets::vbox(16);
    slide_box.set_margin_start(20);
    slide_box.set_margin_end(20);
    container.append(&widgets::scroller(&slide_box));

    let footer = widgets::hbox(12);
    footer.set_margin_top(12);
    footer.set_margin_bottom(16);
    footer.set_margin_start(20);
    footer.set_margin_end(20);
    let counter = label("", &["metric-label"]);
    counter.set_hexpand(true);
    counter.set_valign(gtk::Align::Center);
    footer.append(&counter);
    let next_btn = gtk::Button::new();
    next_btn.add_css_class("pill");
    footer.append(&next_btn);
    container.append(&footer);

    window.set_content(Some(&container));

    let nav = Rc::new(RefCell::new(Navigator::default()));

    let render = {
        let nav = nav.clone();
        let dots = dots.clone();
        let slide_box = slide_box.clone();
        let counter = counter.clone();
        let next_btn = next_btn.clone();
        move || {
            let nav = nav.borrow();
            let Some(slide) = nav.current() else { return };
            debug!("Showing onboarding slide {}", slide.id);
            let tone = slide.tone.css_class();

            widgets::clear(&dots);
            for (filled, current) in nav.dots() {
                let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
                dot.add_css_class("dot");
                if filled {
                    dot.add_css_class(&format!("{tone}-fill"));
                }
                if current {
                    dot.add_css_class("current");
                }
                dots.append(&dot);
            }

            widgets::clear(&slide_box);
            fill_slide(&slide_box, slide);

            counter.set_label(&nav.counter_label().unwrap_or_default());
            next_btn.set_label(nav.button_label());
            for class in next_btn.css_classes() {
                if class.starts_with("tone-") {
                    next_btn.remove_css_class(&class);
                }
            }
            next_btn.add_css_class(&format!("{tone}-bg"));
        }
    };
    render();

    // Leaves the flow for the dashboard once the navigator reaches the end.
    let finish = {
        let app = app.clone();
        let window = window.clone();
        move || {
            crate::ui::main_window::show_main_window(&app, &settings);
            window.close();
        }
    };

    {
        let nav = nav.clone();
        let finish = finish.clone();
        next_btn.connect_clicked(move |_| {
            let finished = nav.borrow_mut().advance() == crate::onboarding::Step::Finished;
            if finished {
                finish();
            } else {
                render();
            }
        });
    }
    {
        let nav = nav.clone();
        skip_btn.connect_clicked(move |_| {
            nav.borrow_mut().skip();
            finish();
        });
    }

    window.present();
}

fn fill_slide(container: &gtk::Box, slide: &OnboardingSlide) {
    let tone = slide.tone;
    let img = widgets::icon(slide.icon, tone);
    img.set_pixel_size(48);
    img.add_css_class(&format!("{}-soft", tone.css_class()));
    img.set_halign(gtk::Align::Center);
    container.append(&img);

    let title = label(slide.title, &["title-1"]);
    title.set_xalign(0.5);
    title.set_justify(gtk::Justification::Center);
    container.append(&title);
    let subtitle = label(slide.subtitle, &["title-4", tone.css_class()]);
    subtitle.set_xalign(0.5);
    container.append(&subtitle);
    let description = label(slide.description, &[]);
    description.set_xalign(0.5);
    description.set_justify(gtk::Justification::Center);
    container.append(&description);

    let features = widgets::vbox(10);
    features.add_css_class("card");
    for feature in slide.features {
        let row = widgets::hbox(10);
        let check = widgets::icon("object-select-symbolic", tone);
        check.set_valign(gtk::Align::Start);
        row.append(&check);
        row.append(&label(feature, &[]));
        features.append(&row);
    }
    container.append(&features);

    match slide.extra {
        SlideExtra::Stats(heading, rows) => {
            let panel = widgets::vbox(8);
            panel.add_css_class(&format!("{}-soft", tone.css_class()));
            panel.append(&label(heading, &["heading"]));
            for &(value, caption) in rows {
                let row = widgets::hbox(12);
                row.append(&label(value, &["metric-value", tone.css_class()]));
                row.append(&label(caption, &["metric-label"]));
                panel.append(&row);
            }
            container.append(&panel);
        }
        SlideExtra::Tags(heading, tags) => {
            let panel = widgets::vbox(8);
            panel.append(&label(heading, &["heading"]));
            let row = widgets::hbox(8);
            for tag in tags {
                row.append(&widgets::pill(tag, tone));
            }
            panel.append(&row);
            container.append(&panel);
        }
        SlideExtra::Impact(heading, tiles) => {
            let panel = widgets::vbox(8);
            panel.add_css_class(&format!("{}-soft", tone.css_class()));
            panel.append(&label(heading, &["heading"]));
            let row = widgets::hbox(12);
            row.set_homogeneous(true);
            for &(value, caption) in tiles {
                row.append(&widgets::metric_tile(&crate::catalog::Metric {
                    value,
                    label: caption,
                    tone,
                }));
            }
            panel.append(&row);
            container.append(&panel);
        }
        SlideExtra::None => {}
    }
}
