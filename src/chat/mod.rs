pub mod intent;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod store;

pub use models::{Message, QUICK_REPLIES};
pub use scheduler::ReplyScheduler;
pub use session::ChatSession;
