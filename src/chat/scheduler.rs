use chrono::Local;
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use crate::chat::session::{ChatSession, PendingReply};
use crate::utils::Timer;

type Pending<H> = Rc<RefCell<HashMap<u64, H>>>;

/// Appends the user's message right away and the assistant's reply after
/// `delay`. Outstanding replies are cancelled when the scheduler is shut down
/// or dropped, so a torn-down screen never receives a late append.
pub struct ReplyScheduler<T: Timer> {
    session: Rc<RefCell<ChatSession>>,
    timer: T,
    delay: Duration,
    pending: Pending<T::Handle>,
    next_ticket: Cell<u64>,
    on_update: Rc<dyn Fn()>,
}

impl<T: Timer> ReplyScheduler<T> {
    pub fn new(
        session: Rc<RefCell<ChatSession>>,
        timer: T,
        delay: Duration,
        on_update: Rc<dyn Fn()>,
    ) -> Self {
        Self {
            session,
            timer,
            delay,
            pending: Rc::new(RefCell::new(HashMap::new())),
            next_ticket: Cell::new(0),
            on_update,
        }
    }

    /// Sends whatever is in the session's input buffer.
    pub fn submit_input(&self) -> bool {
        let reply = self.session.borrow_mut().send_input(Local::now());
        match reply {
            Some(reply) => {
                self.schedule(reply);
                true
            }
            None => false,
        }
    }

    /// Sends `text` directly, as the quick-reply buttons do.
    pub fn submit(&self, text: &str) -> bool {
        let reply = self.session.borrow_mut().send(text, Local::now());
        match reply {
            Some(reply) => {
                self.schedule(reply);
                true
            }
            None => false,
        }
    }

    fn schedule(&self, reply: PendingReply) {
        (self.on_update)();

        let ticket = self.next_ticket.get();
        self.next_ticket.set(ticket + 1);

        let session = self.session.clone();
        let pending = self.pending.clone();
        let on_update = self.on_update.clone();
        let handle = self.timer.start(
            self.delay,
            Box::new(move || {
                pending.borrow_mut().remove(&ticket);
                debug!("Reply {ticket} fired ({:?})", reply.intent);
                session.borrow_mut().deliver(reply, Local::now());
                on_update();
            }),
        );
        self.pending.borrow_mut().insert(ticket, handle);
        debug!("Reply {ticket} scheduled in {:?}", self.delay);
    }

    pub fn shutdown(&self) {
        let drained: Vec<(u64, T::Handle)> = self.pending.borrow_mut().drain().collect();
        if !drained.is_empty() {
            info!("Cancelling {} pending replies", drained.len());
        }
        for (_, handle) in drained {
            self.timer.stop(handle);
        }
    }
}

impl<T: Timer> Drop for ReplyScheduler<T> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::intent::Intent;
    use crate::utils::testing::ManualTimer;

    type Setup = (ReplyScheduler<ManualTimer>, Rc<RefCell<ChatSession>>, Rc<Cell<usize>>);

    fn scheduler(timer: ManualTimer) -> Setup {
        let updates = Rc::new(Cell::new(0));
        let counter = updates.clone();
        let session = Rc::new(RefCell::new(ChatSession::new(Local::now())));
        let scheduler = ReplyScheduler::new(
            session.clone(),
            timer,
            Duration::from_millis(1000),
            Rc::new(move || counter.set(counter.get() + 1)),
        );
        (scheduler, session, updates)
    }

    fn reply_for(input: &str) -> &'static str {
        Intent::classify(input).response()
    }

    #[test]
    fn user_message_is_immediate_reply_is_deferred() {
        let timer = ManualTimer::default();
        let (scheduler, session, updates) = scheduler(timer.clone());

        assert!(scheduler.submit("Show crop advisory"));
        assert_eq!(session.borrow().messages().len(), 2);
        assert_eq!(scheduler.pending.borrow().len(), 1);
        assert_eq!(updates.get(), 1);

        timer.fire(0);
        let messages = session.borrow().messages().to_vec();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].text, reply_for("Show crop advisory"));
        assert!(!messages[2].is_user);
        assert!(scheduler.pending.borrow().is_empty());
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn blank_submission_schedules_nothing() {
        let timer = ManualTimer::default();
        let (scheduler, session, updates) = scheduler(timer.clone());

        session.borrow_mut().set_input("   ");
        assert!(!scheduler.submit_input());
        assert!(!scheduler.submit(""));
        assert_eq!(session.borrow().messages().len(), 1);
        assert!(scheduler.pending.borrow().is_empty());
        assert_eq!(updates.get(), 0);
        assert!(timer.queued.borrow().is_empty());
    }

    #[test]
    fn replies_follow_their_questions_in_firing_order() {
        let timer = ManualTimer::default();
        let (scheduler, session, _) = scheduler(timer.clone());

        session.borrow_mut().set_input("water level");
        assert!(scheduler.submit_input());
        assert!(scheduler.submit("weather"));
        assert_eq!(scheduler.pending.borrow().len(), 2);
        timer.fire_all();

        let session = session.borrow();
        let texts: Vec<&str> = session.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(
            &texts[1..],
            &["water level", "weather", reply_for("water level"), reply_for("weather")]
        );
    }

    #[test]
    fn shutdown_cancels_outstanding_replies() {
        let timer = ManualTimer::default();
        let (scheduler, session, _) = scheduler(timer.clone());

        scheduler.submit("crop");
        scheduler.submit("tips");
        timer.fire(0);
        scheduler.shutdown();

        assert_eq!(*timer.stopped.borrow(), vec![1]);
        assert!(scheduler.pending.borrow().is_empty());
        timer.fire_all();
        assert_eq!(session.borrow().messages().len(), 4);
    }

    #[test]
    fn dropping_the_scheduler_cancels_replies() {
        let timer = ManualTimer::default();
        let (scheduler, session, _) = scheduler(timer.clone());

        scheduler.submit("forecast");
        drop(scheduler);

        timer.fire_all();
        assert_eq!(*timer.stopped.borrow(), vec![0]);
        assert_eq!(session.borrow().messages().len(), 2);
    }
}
