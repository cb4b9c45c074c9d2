pub mod config;
pub mod docs;
pub mod handlers;
pub mod startup;

pub use docs::ApiDoc;
pub use startup::{build_router, AppState, Application};
