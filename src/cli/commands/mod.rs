//! CLI command handlers, one per file.

mod clear_history;
mod history;
mod send;
mod status;
mod watch;

pub use clear_history::run_clear_history;
pub use history::run_history;
pub use send::run_send;
pub use status::run_status;
pub use watch::run_watch;
