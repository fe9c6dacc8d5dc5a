/// Backend submodules for font ingestion
///
/// - `handlers`: action dispatch and the channel-backed notifier/style sinks
/// - `main_loop`: Tokio runtime and the sequential action loop
mod handlers;
mod main_loop;

// Re-export the main backend entry points
pub use handlers::{ChannelNotifier, ChannelStyles};
pub use main_loop::run_backend;
