use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use axum::http::header::COOKIE;
use axum::http::HeaderMap;
use base64::prelude::*;
use tracing::debug;
use uuid::Uuid;

use crate::booking::{BookingForm, Notification};

pub(crate) const COOKIE_NAME: &str = "salon_session";

/// One visitor's booking dialog plus notifications waiting to be shown.
#[derive(Debug)]
pub(crate) struct FormSession {
    pub(crate) form: BookingForm,
    pub(crate) notifications: Vec<Notification>,
    last_seen: Instant,
}

impl FormSession {
    fn new() -> Self {
        Self {
            form: BookingForm::default(),
            notifications: Vec::new(),
            last_seen: Instant::now(),
        }
    }
}

#[derive(Clone)]
pub(crate) struct Sessions {
    inner: Arc<Mutex<HashMap<String, FormSession>>>,
    ttl: Duration,
}

pub(crate) struct SessionAccess<R> {
    pub(crate) id: String,
    pub(crate) created: bool,
    pub(crate) value: R,
}

pub(crate) fn set_cookie_value(id: &str) -> String {
    format!("{COOKIE_NAME}={id}; Path=/; HttpOnly; SameSite=Lax")
}

impl Sessions {
    pub(crate) fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
            ttl,
        }
    }

    /// Run `f` against the session named by `id`, creating a fresh one when
    /// the id is missing or unknown.
    pub(crate) fn with<R>(
        &self,
        id: Option<&str>,
        f: impl FnOnce(&mut FormSession) -> R,
    ) -> SessionAccess<R> {
        let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        let known = id.filter(|id| map.contains_key(*id)).map(str::to_string);
        let (id, created) = match known {
            Some(id) => (id, false),
            None => {
                let ttl = self.ttl;
                let before = map.len();
                map.retain(|_, s| now.duration_since(s.last_seen) < ttl);
                if map.len() < before {
                    debug!("Sessions: pruned {} idle form sessions", before - map.len());
                }
                (new_session_id(), true)
            }
        };

        let session = map.entry(id.clone()).or_insert_with(FormSession::new);
        session.last_seen = now;
        let value = f(session);
        SessionAccess { id, created, value }
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

pub(crate) fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value.to_string())
}

/// Random v4 UUID, base64url-encoded for the cookie.
fn new_session_id() -> String {
    BASE64_URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes())
}
