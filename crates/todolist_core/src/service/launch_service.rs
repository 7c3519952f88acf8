//! First-launch onboarding flag.
//!
//! # Invariants
//! - Onboarding is shown until `complete_onboarding` has been called once.

use crate::repo::category_repo::RepoResult;
use crate::repo::settings_repo::{SettingsRepository, FIRST_LAUNCH_KEY};

/// What the category list should do when it first appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaunchState {
    pub show_onboarding: bool,
}

pub struct LaunchService<S: SettingsRepository> {
    settings: S,
}

impl<S: SettingsRepository> LaunchService<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn on_launch(&self) -> RepoResult<LaunchState> {
        let done = self.settings.get_bool(FIRST_LAUNCH_KEY)?.unwrap_or(false);
        Ok(LaunchState {
            show_onboarding: !done,
        })
    }

    pub fn complete_onboarding(&self) -> RepoResult<()> {
        self.settings.set_bool(FIRST_LAUNCH_KEY, true)
    }
}
