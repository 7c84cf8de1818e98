pub mod command_error;
pub mod display;
pub mod exit_code;
pub mod time;
