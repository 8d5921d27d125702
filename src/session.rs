//! Per-visitor wizard sessions, identified by an http-only cookie.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
    time::{Duration, Instant},
};

use actix_web::cookie::{time, Cookie, SameSite};
use actix_web::HttpRequest;
use uuid::Uuid;

use crate::booking::BookingWizard;

pub const SESSION_COOKIE: &str = "lepri_wizard";

pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Session id from the request cookie, if it looks like one we issued.
pub fn session_id(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| Uuid::parse_str(value).is_ok())
}

/// Existing session id, or a freshly issued one (`true` when new).
pub fn session_or_new(req: &HttpRequest) -> (String, bool) {
    match session_id(req) {
        Some(id) => (id, false),
        None => (new_id(), true),
    }
}

pub fn session_cookie(req: &HttpRequest, id: &str, idle: Duration) -> Cookie<'static> {
    let max_age = time::Duration::seconds(i64::try_from(idle.as_secs()).unwrap_or(i64::MAX));
    let mut builder = Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(max_age);
    if req.connection_info().scheme() == "https" {
        builder = builder.secure(true);
    }
    builder.finish()
}

struct WizardSession {
    wizard: BookingWizard,
    touched: Instant,
}

/// Wizards keyed by session id. Each one is only touched by requests
/// carrying its cookie; the lock is never held across an await.
pub struct WizardStore {
    sessions: Mutex<HashMap<String, WizardSession>>,
    idle: Duration,
}

impl WizardStore {
    pub fn new(idle: Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            idle,
        }
    }

    pub fn idle(&self) -> Duration {
        self.idle
    }

    /// Copy of the wizard for rendering; a fresh one for unknown ids.
    pub fn snapshot(&self, id: Option<&str>) -> BookingWizard {
        id.and_then(|id| {
            self.lock()
                .get(id)
                .map(|session| session.wizard.clone())
        })
        .unwrap_or_default()
    }

    /// Runs `f` on the session's wizard, creating it on first use.
    pub fn with_wizard<R>(&self, id: &str, f: impl FnOnce(&mut BookingWizard) -> R) -> R {
        let mut sessions = self.lock();
        let session = sessions
            .entry(id.to_string())
            .or_insert_with(|| WizardSession {
                wizard: BookingWizard::new(),
                touched: Instant::now(),
            });
        session.touched = Instant::now();
        f(&mut session.wizard)
    }

    /// Drops sessions idle for longer than the configured limit.
    pub fn prune(&self, now: Instant) -> usize {
        let idle = self.idle;
        let mut sessions = self.lock();
        let before = sessions.len();
        sessions.retain(|_, session| now.saturating_duration_since(session.touched) <= idle);
        before - sessions.len()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, WizardSession>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;
    use crate::booking::{Field, Step};

    #[test]
    fn sessions_are_isolated() {
        let store = WizardStore::new(Duration::from_secs(60));
        store.with_wizard("a", |wizard| wizard.edit(Field::Service, "taglio")).unwrap();

        assert_eq!(store.snapshot(Some("a")).form().service, "taglio");
        assert_eq!(store.snapshot(Some("b")).form().service, "");
        assert_eq!(store.snapshot(None).step(), Step::SelectServiceAndStylist);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn prune_drops_only_idle_sessions() {
        let store = WizardStore::new(Duration::from_secs(60));
        store.with_wizard("a", |_| ());

        assert_eq!(store.prune(Instant::now()), 0);
        assert_eq!(store.prune(Instant::now() + Duration::from_secs(61)), 1);
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn only_issued_ids_are_read_back() {
        let id = new_id();
        let req = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, id.clone()))
            .to_http_request();
        assert_eq!(session_id(&req), Some(id));

        let forged = TestRequest::default()
            .cookie(Cookie::new(SESSION_COOKIE, "../../etc"))
            .to_http_request();
        assert_eq!(session_id(&forged), None);
    }

    #[test]
    fn cookie_is_http_only_and_scoped_to_site() {
        let req = TestRequest::default().to_http_request();
        let cookie = session_cookie(&req, "abc", Duration::from_secs(600));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::seconds(600)));
        assert_eq!(cookie.secure(), None);
    }
}
