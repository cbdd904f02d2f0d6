pub mod bootstrap;
pub mod logging;
pub mod state;

pub use bootstrap::AppBootstrap;
pub use state::AppState;
