/// Main configuration module.
///
/// Re-exports submodules for strategy and server configuration.
pub mod game;
pub mod server;
