//! Tokio event loop driving a session.
//!
//! The loop owns the session. It waits on the next host command and, while
//! a reveal is running, on the revert deadline. Every handled command or
//! revert publishes a [`SessionUpdate`] on a watch channel.

use crate::animation::AnimationEvent;
use crate::commands::Command;
use crate::session::EditSession;
use headline_model::HeadlineSettings;
use serde::Serialize;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

/// State published after every change
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    pub version: u64,
    pub replay_token: u64,
    pub settings: HeadlineSettings,
    pub selected_word: Option<usize>,
    pub animation: Option<AnimationEvent>,
}

impl SessionUpdate {
    pub fn capture(session: &EditSession, animation: Option<AnimationEvent>) -> Self {
        Self {
            version: session.version(),
            replay_token: session.replay_token(),
            settings: session.settings().clone(),
            selected_word: session.selected_word(),
            animation,
        }
    }
}

/// Run `session` until the command channel closes, then hand it back
pub async fn run(
    mut session: EditSession,
    mut commands: mpsc::Receiver<Command>,
    updates: watch::Sender<SessionUpdate>,
) -> EditSession {
    info!("Session loop started");

    loop {
        let wait = session
            .pending_deadline()
            .map(|deadline| deadline.saturating_sub(session.now()));

        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                match session.dispatch(command) {
                    Ok(animation) => {
                        updates.send_replace(SessionUpdate::capture(&session, animation));
                    }
                    Err(e) => warn!(error = %e, "Command failed"),
                }
            }
            _ = tokio::time::sleep(wait.unwrap_or_default()), if wait.is_some() => {
                if let Some(event) = session.tick() {
                    updates.send_replace(SessionUpdate::capture(&session, Some(event)));
                }
            }
        }
    }

    info!(version = session.version(), "Session loop stopped");
    session
}
