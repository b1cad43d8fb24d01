mod configuration;
mod dispatch;
