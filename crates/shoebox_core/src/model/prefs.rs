//! Launch preferences read once at startup.

use serde::{Deserialize, Serialize};

/// Flags the composition root consults to choose the initial screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LaunchPrefs {
    #[serde(default)]
    pub onboarding_seen: bool,
}
