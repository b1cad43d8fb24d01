pub mod configuration;
pub mod domain;
pub mod newsletter;
pub mod notification;
pub mod senders;
pub mod startup;
pub mod telemetry;
pub mod user_source;
pub mod validators;
