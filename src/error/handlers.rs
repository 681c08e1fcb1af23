//! Error reporting
//!
//! Logs session errors at a severity matching their impact.

use crate::error::types::SessionError;
use log::{error, warn};

/// Log a session error; fatal errors go to `error!`, recoverable ones to `warn!`
pub fn report_error(err: &SessionError) {
    if err.is_fatal() {
        error!("Fatal session error: {}", err);
    } else {
        warn!("{}", err);
    }
}
