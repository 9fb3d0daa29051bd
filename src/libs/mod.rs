pub mod clock;
pub mod config;
pub mod date;
pub mod duration;
pub mod errors;
pub mod formatter;
pub mod messages;
pub mod render;
pub mod session;
pub mod view;
pub mod worklog;
