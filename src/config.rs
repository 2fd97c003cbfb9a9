//! Client configuration: where the companion server lives and how often to
//! talk to it.

mod loader;
mod paths;
mod types;

pub use loader::SERVER_URL_ENV;
pub use types::Config;
