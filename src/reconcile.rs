//! Choosing between the local and remote saved game

use crate::persistence::PersistedRecord;

/// Asks the player whether an older remote save should replace newer local progress
pub trait ConfirmOverride: Send + Sync {
    fn confirm_override(&self, local: &PersistedRecord, remote: &PersistedRecord, now: i64) -> bool;
}

impl<F> ConfirmOverride for F
where
    F: Fn(&PersistedRecord, &PersistedRecord, i64) -> bool + Send + Sync,
{
    fn confirm_override(&self, local: &PersistedRecord, remote: &PersistedRecord, now: i64) -> bool {
        self(local, remote, now)
    }
}

/// Why the local record was kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalReason {
    /// Remote had nothing for this player
    RemoteMissing,
    /// Remote is for an earlier puzzle
    RemoteStale,
    /// Local was newer and the player declined the override
    OverrideDeclined,
    /// No remote bin or no player name, so the remote was never consulted
    RemoteDisabled,
}

impl LocalReason {
    /// Notice to show the player, if any
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            LocalReason::RemoteMissing => Some("No remote save found, continuing local game"),
            LocalReason::RemoteStale => Some("Remote save is from an earlier puzzle, keeping local game"),
            LocalReason::OverrideDeclined | LocalReason::RemoteDisabled => None,
        }
    }
}

/// The record that becomes the active game
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveRecord {
    /// Nothing saved anywhere; start a new puzzle
    NoSavedState,
    Local(PersistedRecord, LocalReason),
    Remote(PersistedRecord),
}

/// Pick the active record from the local and remote saves.
///
/// When local is newer than a same-day remote, `confirm` decides; without a
/// confirmation channel the remote record wins.
pub fn reconcile(
    local: Option<PersistedRecord>,
    remote: Option<PersistedRecord>,
    now: i64,
    confirm: Option<&dyn ConfirmOverride>,
) -> ActiveRecord {
    match (local, remote) {
        (None, None) => ActiveRecord::NoSavedState,
        (Some(local), None) => {
            tracing::warn!("No remote save found, using local game");
            ActiveRecord::Local(local, LocalReason::RemoteMissing)
        }
        (None, Some(remote)) => ActiveRecord::Remote(remote),
        (Some(local), Some(remote)) => {
            if remote_is_earlier_puzzle(&local, &remote) {
                return ActiveRecord::Local(local, LocalReason::RemoteStale);
            }

            if local.saved_at > remote.saved_at {
                let overridden = confirm
                    .map(|c| c.confirm_override(&local, &remote, now))
                    .unwrap_or(true);
                if !overridden {
                    return ActiveRecord::Local(local, LocalReason::OverrideDeclined);
                }
                tracing::info!(
                    "Replacing local game saved {}s ago with remote saved {}s ago",
                    (now - local.saved_at) / 1000,
                    (now - remote.saved_at) / 1000
                );
            }

            ActiveRecord::Remote(remote)
        }
    }
}

/// Dates that don't parse are never considered earlier
fn remote_is_earlier_puzzle(local: &PersistedRecord, remote: &PersistedRecord) -> bool {
    match (local.puzzle_date(), remote.puzzle_date()) {
        (Some(l), Some(r)) => r < l,
        _ => false,
    }
}
