//! # Connection Actions
//!
//! The allow-list of the edge connection service, expressed as a closed enum.
//! Requests name an action by its wire spelling, which depends on the
//! configured `ActionNaming`.

use serde::{Deserialize, Serialize};

/// What to do with the edge network connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionAction {
    Enable,
    Disable,
}

impl ConnectionAction {
    pub const ALL: [ConnectionAction; 2] = [ConnectionAction::Enable, ConnectionAction::Disable];
}

/// How actions are spelled in request paths and passed to the script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionNaming {
    /// `enable` / `disable`
    #[default]
    Plain,
    /// `enable-connection` / `disable-connection`
    Suffixed,
}

impl ActionNaming {
    pub fn spell(self, action: ConnectionAction) -> &'static str {
        match (self, action) {
            (ActionNaming::Plain, ConnectionAction::Enable) => "enable",
            (ActionNaming::Plain, ConnectionAction::Disable) => "disable",
            (ActionNaming::Suffixed, ConnectionAction::Enable) => "enable-connection",
            (ActionNaming::Suffixed, ConnectionAction::Disable) => "disable-connection",
        }
    }

    /// Looks `raw` up in the allow-list. Matching is exact.
    pub fn parse(self, raw: &str) -> Option<ConnectionAction> {
        ConnectionAction::ALL
            .into_iter()
            .find(|action| self.spell(*action) == raw)
    }

    pub fn allowed(self) -> Vec<&'static str> {
        ConnectionAction::ALL
            .into_iter()
            .map(|action| self.spell(action))
            .collect()
    }
}
