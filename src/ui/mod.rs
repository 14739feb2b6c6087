pub mod logger;
pub mod messages;
