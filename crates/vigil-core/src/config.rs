// ── Console configuration ──
//
// Plain settings handed to the core by the embedding application. The
// core never reads configuration files itself.

use std::time::Duration;

use crate::pipeline::ViewState;

/// Actor recorded on acknowledgements when none is configured.
pub const DEFAULT_OPERATOR: &str = "Security Desk";

/// Delay of a simulated refresh when none is configured.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Identity stamped onto acknowledgements.
    pub operator: String,
    pub refresh_delay: Duration,
    /// View parameters a new session starts with.
    pub view: ViewState,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            operator: DEFAULT_OPERATOR.to_owned(),
            refresh_delay: DEFAULT_REFRESH_DELAY,
            view: ViewState::default(),
        }
    }
}
