//! Sending chains to the `log` facade.

use crate::ChainedError;
use log::Level;

impl ChainedError {
    /// Logs the full chain as a single record.
    pub fn log(&self, level: Level) {
        log::log!(target: "hb_context", level, "{}", self.full_chain());
    }

    pub fn log_error(&self) {
        self.log(Level::Error);
    }
}
