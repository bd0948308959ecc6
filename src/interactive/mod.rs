//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Modal, Screen, run_tui};
pub use rendering::ui;
