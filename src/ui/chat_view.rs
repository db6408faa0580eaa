use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::Local;
use gtk4 as gtk;
use gtk4::prelude::*;
use log::info;

use crate::catalog::Tone;
use crate::chat::session::MAX_INPUT_CHARS;
use crate::chat::{ChatSession, Message, QUICK_REPLIES, ReplyScheduler};
use crate::ui::widgets::{self, label};
use crate::utils::{GlibTimer, format_time};

pub struct ChatView;

impl ChatView {
    pub fn new(reply_delay: Duration) -> gtk::Widget {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 0);
        root.append(&header());

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .build();
        let body = widgets::vbox(12);
        body.set_margin_top(12);
        body.set_margin_bottom(12);
        body.set_margin_start(12);
        body.set_margin_end(12);
        let messages_box = widgets::vbox(12);
        body.append(&messages_box);

        let quick_box = widgets::vbox(8);
        quick_box.append(&label("Quick Actions:", &["heading"]));
        let quick_grid = gtk::FlowBox::builder()
            .selection_mode(gtk::SelectionMode::None)
            .max_children_per_line(2)
            .column_spacing(8)
            .row_spacing(8)
            .build();
        quick_box.append(&quick_grid);
        body.append(&quick_box);
        scroller.set_child(Some(&body));
        root.append(&scroller);

        // Input row
        let input_area = widgets::vbox(4);
        input_area.set_margin_top(8);
        input_area.set_margin_bottom(8);
        input_area.set_margin_start(8);
        input_area.set_margin_end(8);
        let input_row = widgets::hbox(6);
        let entry = gtk::Entry::new();
        entry.set_hexpand(true);
        entry.set_max_length(MAX_INPUT_CHARS as i32);
        entry.set_placeholder_text(Some("Type your question... (हिंदी/English)"));
        let mic_btn = gtk::Button::from_icon_name("audio-input-microphone-symbolic");
        mic_btn.set_sensitive(false);
        mic_btn.set_tooltip_text(Some("Voice input is not available on desktop"));
        let send_btn = gtk::Button::from_icon_name("mail-send-symbolic");
        send_btn.add_css_class("suggested-action");
        send_btn.set_sensitive(false);
        input_row.append(&entry);
        input_row.append(&mic_btn);
        input_row.append(&send_btn);
        input_area.append(&input_row);
        input_area.append(&label(
            "💡 Try: \"मेरे क्षेत्र में पानी का स्तर क्या है?\" or \"Show crop advisory\"",
            &["hint"],
        ));
        root.append(&input_area);

        let session = Rc::new(RefCell::new(ChatSession::new(Local::now())));

        let render: Rc<dyn Fn()> = {
            let session = session.clone();
            let messages_box = messages_box.clone();
            let quick_box = quick_box.clone();
            let scroller = scroller.clone();
            Rc::new(move || {
                let session = session.borrow();
                widgets::clear(&messages_box);
                for message in session.messages() {
                    messages_box.append(&bubble(message));
                }
                quick_box.set_visible(session.show_quick_replies());
                let adj = scroller.vadjustment();
                let _ = glib::idle_add_local_once(move || adj.set_value(adj.upper()));
            })
        };
        render();

        let scheduler = Rc::new(ReplyScheduler::new(
            session.clone(),
            GlibTimer,
            reply_delay,
            render.clone(),
        ));

        // Mirrors the session's input buffer back into the entry after a send.
        let sync_entry = {
            let session = session.clone();
            let entry = entry.clone();
            move || {
                let text = session.borrow().input().to_string();
                entry.set_text(&text);
            }
        };

        {
            let session = session.clone();
            let send_btn = send_btn.clone();
            entry.connect_changed(move |e| {
                let mut session = session.borrow_mut();
                session.set_input(&e.text());
                send_btn.set_sensitive(session.can_send());
            });
        }

        // Send actions
        {
            let scheduler = scheduler.clone();
            let sync_entry = sync_entry.clone();
            let send: Rc<dyn Fn()> = Rc::new(move || {
                if scheduler.submit_input() {
                    info!("Chat message submitted");
                    sync_entry();
                }
            });
            {
                let send = send.clone();
                send_btn.connect_clicked(move |_| (send)());
            }
            {
                let send = send.clone();
                entry.connect_activate(move |_| (send)());
            }
        }

        for reply in QUICK_REPLIES {
            let content = widgets::hbox(6);
            content.append(&widgets::icon(reply.icon, Tone::Blue));
            content.append(&gtk::Label::new(Some(reply.label)));
            let button = gtk::Button::builder().child(&content).build();
            let scheduler = scheduler.clone();
            let sync_entry = sync_entry.clone();
            button.connect_clicked(move |_| {
                if scheduler.submit(reply.label) {
                    info!("Quick reply submitted: {}", reply.label);
                    sync_entry();
                }
            });
            quick_grid.insert(&button, -1);
        }

        {
            let scheduler = scheduler.clone();
            root.connect_destroy(move |_| scheduler.shutdown());
        }

        root.upcast()
    }
}

fn header() -> gtk::Box {
    let root = widgets::hbox(12);
    root.add_css_class("banner");
    let img = gtk::Image::from_icon_name("computer-symbolic");
    img.set_pixel_size(24);
    root.append(&img);

    let text = widgets::vbox(2);
    text.set_hexpand(true);
    text.append(&label("AI Water Assistant", &["title-3"]));
    text.append(&label("हिंदी & English • Voice Enabled", &["dim"]));
    root.append(&text);

    let status = widgets::hbox(4);
    let dot = gtk::Box::new(gtk::Orientation::Horizontal, 0);
    dot.add_css_class("dot");
    dot.add_css_class(&format!("{}-fill", Tone::Green.css_class()));
    dot.set_valign(gtk::Align::Center);
    status.append(&dot);
    status.append(&label("Online", &[]));
    status.set_valign(gtk::Align::Center);
    root.append(&status);
    root
}

fn bubble(message: &Message) -> gtk::Box {
    let row = widgets::hbox(8);
    row.set_widget_name(&message.id);
    let bubble = widgets::vbox(4);
    bubble.add_css_class("bubble");
    bubble.add_css_class(if message.is_user { "user" } else { "assistant" });

    let text = label(&message.text, &[]);
    text.set_selectable(true);
    text.set_max_width_chars(40);
    bubble.append(&text);
    let time = label(&format_time(&message.timestamp), &["time"]);
    time.set_xalign(1.0);
    bubble.append(&time);

    if message.is_user {
        row.set_halign(gtk::Align::End);
        row.append(&bubble);
        row.append(&widgets::icon("avatar-default-symbolic", Tone::Blue));
    } else {
        row.set_halign(gtk::Align::Start);
        row.append(&widgets::icon("computer-symbolic", Tone::Blue));
        row.append(&bubble);
    }
    row
}
