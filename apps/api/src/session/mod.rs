//! In-memory editing sessions.
//!
//! Each session owns one document, its appearance, and the latest ATS
//! feedback. Sessions live for the process lifetime: there is no database,
//! and deleting a session discards its document.
//!
//! AI operations (enhancement, ATS check) are exclusive per session. The
//! exclusivity is a separate atomic flag rather than the data lock because
//! the session must stay readable for previews and exports while a model
//! call is in flight.

pub mod handlers;

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::editor::EditorState;
use crate::errors::AppError;
use crate::models::appearance::RenderConfig;
use crate::models::feedback::AtsFeedback;

/// Everything a session holds.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub editor: EditorState,
    pub render_config: RenderConfig,
    pub feedback: Option<AtsFeedback>,
}

impl Default for SessionData {
    fn default() -> Self {
        SessionData {
            editor: EditorState::starter(),
            render_config: RenderConfig::default(),
            feedback: None,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    data: RwLock<SessionData>,
    ai_busy: AtomicBool,
}

impl Session {
    fn new() -> Self {
        Session {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            data: RwLock::new(SessionData::default()),
            ai_busy: AtomicBool::new(false),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, SessionData> {
        self.data.read().expect("session lock poisoned")
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, SessionData> {
        self.data.write().expect("session lock poisoned")
    }

    /// Claims the session's single AI slot. While the returned guard lives,
    /// further claims fail with [`AppError::Busy`].
    pub fn begin_ai(&self) -> Result<AiExclusive<'_>, AppError> {
        match self
            .ai_busy
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
        {
            Ok(_) => Ok(AiExclusive { session: self }),
            Err(_) => Err(AppError::Busy(
                "an AI operation is already running for this session".to_string(),
            )),
        }
    }
}

/// Holds the AI slot; dropping it releases the slot.
#[derive(Debug)]
pub struct AiExclusive<'a> {
    session: &'a Session,
}

impl Drop for AiExclusive<'_> {
    fn drop(&mut self) {
        self.session.ai_busy.store(false, Ordering::Release);
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Arc<Session>>>>,
}

impl SessionStore {
    /// Creates a session seeded with the starter document.
    pub fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new());
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .insert(session.id, session.clone());
        session
    }

    pub fn get(&self, id: &Uuid) -> Result<Arc<Session>, AppError> {
        self.sessions
            .read()
            .expect("session store lock poisoned")
            .get(id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    pub fn remove(&self, id: &Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .expect("session store lock poisoned")
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::appearance::TemplateKind;

    #[test]
    fn test_new_session_starts_from_the_starter_document() {
        let store = SessionStore::default();
        let session = store.create();
        let data = session.read();
        assert_eq!(data.editor.document.name, "Richard Johnson");
        assert_eq!(data.render_config.template, TemplateKind::Modern);
        assert!(data.feedback.is_none());
    }

    #[test]
    fn test_store_returns_the_same_session_it_created() {
        let store = SessionStore::default();
        let created = store.create();
        let fetched = store.get(&created.id).unwrap();
        assert_eq!(created.id, fetched.id);
        assert!(Arc::ptr_eq(&created, &fetched));
    }

    #[test]
    fn test_get_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let err = store.get(&Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_removed_session_is_gone() {
        let store = SessionStore::default();
        let session = store.create();
        store.remove(&session.id).unwrap();
        assert!(matches!(
            store.get(&session.id).unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            store.remove(&session.id).unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[test]
    fn test_ai_slot_is_exclusive() {
        let store = SessionStore::default();
        let session = store.create();
        let slot = session.begin_ai().unwrap();
        assert!(matches!(
            session.begin_ai().unwrap_err(),
            AppError::Busy(_)
        ));
        drop(slot);
        assert!(session.begin_ai().is_ok());
    }

    #[test]
    fn test_data_stays_readable_while_ai_slot_is_held() {
        let store = SessionStore::default();
        let session = store.create();
        let _slot = session.begin_ai().unwrap();
        assert_eq!(session.read().editor.document.name, "Richard Johnson");
    }
}
