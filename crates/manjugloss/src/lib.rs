pub mod handlers;
pub mod loader;

pub use handlers::{AppState, router};
pub use loader::load_dictionaries;
