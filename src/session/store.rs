use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

use super::state::SessionState;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("session `{0}` not found")]
    NotFound(String),

    #[error("A translation is already in progress.")]
    Busy,
}

struct SessionSlot {
    state: SessionState,
    busy: bool,
    // bumped by clear so a translation started before it is discarded
    generation: u64,
    last_active: DateTime<Utc>,
}

impl SessionSlot {
    fn new() -> Self {
        Self {
            state: SessionState::new(),
            busy: false,
            generation: 0,
            last_active: Utc::now(),
        }
    }

    fn touch(&mut self) {
        self.last_active = Utc::now();
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            state: self.state.clone(),
            busy: self.busy,
        }
    }
}

/// Copy of a session as seen by one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub state: SessionState,
    pub busy: bool,
}

/// Result of releasing a translation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedTranslation {
    pub snapshot: SessionSnapshot,
    /// False when a clear ran meanwhile and the working copy was dropped
    pub committed: bool,
}

/// Checked-out working copy for an in-flight translation
#[derive(Debug)]
pub struct TranslationTicket {
    pub state: SessionState,
    generation: u64,
}

/// All live sessions, keyed by session id
#[derive(Default)]
pub struct SessionStore {
    sessions: DashMap<String, SessionSlot>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self) -> String {
        let session_id = Uuid::new_v4().to_string();
        self.sessions.insert(session_id.clone(), SessionSlot::new());
        info!("Created session {}", session_id);
        session_id
    }

    pub fn snapshot(&self, session_id: &str) -> Result<SessionSnapshot, SessionError> {
        let mut slot = self.slot_mut(session_id)?;
        slot.touch();
        Ok(slot.snapshot())
    }

    /// Mark the session busy and hand out its state. Fails if a translation is
    /// already running for this session.
    pub fn begin_translation(&self, session_id: &str) -> Result<TranslationTicket, SessionError> {
        let mut slot = self.slot_mut(session_id)?;
        if slot.busy {
            debug!("Rejected submit for busy session {}", session_id);
            return Err(SessionError::Busy);
        }
        slot.busy = true;
        slot.touch();
        Ok(TranslationTicket {
            state: slot.state.clone(),
            generation: slot.generation,
        })
    }

    /// Commit the working copy and release the busy flag. The copy is dropped
    /// when the session was cleared in the meantime.
    pub fn finish_translation(
        &self,
        session_id: &str,
        ticket: TranslationTicket,
    ) -> Result<FinishedTranslation, SessionError> {
        let mut slot = self.slot_mut(session_id)?;
        slot.busy = false;
        slot.touch();
        let committed = slot.generation == ticket.generation;
        if committed {
            slot.state = ticket.state;
        } else {
            debug!("Session {} was cleared during translation, dropping result", session_id);
        }
        Ok(FinishedTranslation {
            snapshot: slot.snapshot(),
            committed,
        })
    }

    /// Release the busy flag without touching the state. Used when the
    /// translation never produced a working copy to hand back.
    pub fn abort_translation(&self, session_id: &str) -> Result<SessionSnapshot, SessionError> {
        let mut slot = self.slot_mut(session_id)?;
        slot.busy = false;
        slot.touch();
        debug!("Released session {} after an aborted translation", session_id);
        Ok(slot.snapshot())
    }

    pub fn clear(&self, session_id: &str) -> Result<SessionSnapshot, SessionError> {
        let mut slot = self.slot_mut(session_id)?;
        super::controller::clear(&mut slot.state);
        slot.generation += 1;
        slot.touch();
        debug!("Cleared session {}", session_id);
        Ok(slot.snapshot())
    }

    pub fn remove(&self, session_id: &str) -> bool {
        let removed = self.sessions.remove(session_id).is_some();
        if removed {
            info!("Removed session {}", session_id);
        }
        removed
    }

    /// Drop sessions idle for longer than `ttl`. Busy sessions are kept.
    pub fn sweep_idle(&self, ttl: Duration) -> usize {
        let cutoff = Utc::now() - ttl;
        let before = self.sessions.len();
        self.sessions
            .retain(|_, slot| slot.busy || slot.last_active >= cutoff);
        let removed = before.saturating_sub(self.sessions.len());
        if removed > 0 {
            info!("Swept {} idle session(s)", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn slot_mut(
        &self,
        session_id: &str,
    ) -> Result<dashmap::mapref::one::RefMut<'_, String, SessionSlot>, SessionError> {
        self.sessions
            .get_mut(session_id)
            .ok_or_else(|| SessionError::NotFound(session_id.to_string()))
    }
}
