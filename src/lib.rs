pub mod config;
pub mod control;
pub mod error;
pub mod protocol;
pub mod session;
pub mod shell;
pub mod transfer;

pub use config::ClientConfig;
pub use session::{Session, SessionState};
