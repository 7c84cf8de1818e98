mod format;
mod gateway;

pub use format::status_change_message;
pub use gateway::{Notifier, CORS_PROXY_URL};
