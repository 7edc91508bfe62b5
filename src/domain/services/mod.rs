//! Domain Services
//!
//! Session-aware logic that operates on domain entities without touching
//! the file system or network.

mod authenticator;
mod listener_adapter;
mod repository_injection;

pub use authenticator::RepositoryAuthenticator;
pub use listener_adapter::TransferListenerAdapter;
pub use repository_injection::SettingsRepositorySystem;
