pub mod chat_view;
pub mod home;
pub mod insights;
pub mod main_window;
pub mod onboarding;
pub mod profile;
pub mod reports;
pub mod splash;
pub mod widgets;
