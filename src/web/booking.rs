use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use super::landing::{render_for_session, with_session_cookie};
use super::session::session_id;
use super::AppState;
use crate::booking::{BookingSelection, Severity};
use crate::fixtures::{AvailabilityProvider, Catalog, SlotQuery};

/// Raw fields posted by the booking dialog. Everything arrives as text;
/// an unchecked time radio is simply absent.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub(crate) struct BookingInput {
    pub(crate) service_id: String,
    pub(crate) staff_id: String,
    pub(crate) date: String,
    pub(crate) time: Option<String>,
    pub(crate) client_name: String,
    pub(crate) client_phone: String,
}

fn parse_id(raw: &str, field: &str, exists: impl Fn(u32) -> bool) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<u32>() {
        Ok(id) if exists(id) => Some(id),
        _ => {
            warn!("Booking form: ignoring unknown {} '{}'", field, raw);
            None
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(e) => {
            warn!("Booking form: ignoring malformed date '{}': {}", raw, e);
            None
        }
    }
}

/// Feed posted fields into the selection's setters.
///
/// Only ids that exist in the catalog and times the availability provider
/// marks selectable get through; anything else is set to `None`, the same as
/// a control left untouched.
pub(crate) fn apply_input(
    selection: &mut BookingSelection,
    input: BookingInput,
    catalog: &Catalog,
    availability: &dyn AvailabilityProvider,
) {
    let service_id = parse_id(&input.service_id, "service", |id| catalog.service(id).is_some());
    let staff_id = parse_id(&input.staff_id, "staff member", |id| {
        catalog.staff_member(id).is_some()
    });
    let date = parse_date(&input.date);

    let query = SlotQuery {
        date,
        staff_id,
        service_id,
    };
    let time = input.time.filter(|t| !t.is_empty()).and_then(|t| {
        if availability.is_selectable(&query, &t) {
            Some(t)
        } else {
            warn!("Booking form: slot '{}' is not available", t);
            None
        }
    });

    selection.set_service(service_id);
    selection.set_staff(staff_id);
    selection.set_date(date);
    selection.set_time(time);
    selection.set_client_name(input.client_name);
    selection.set_client_phone(input.client_phone);
}

pub(crate) async fn open_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render_for_session(&state, &headers, |form| form.open())
}

pub(crate) async fn submit_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(input): Form<BookingInput>,
) -> Response {
    let id = session_id(&headers);
    let access = state.sessions.with(id.as_deref(), |session| {
        session.form.open();
        apply_input(
            &mut session.form.selection,
            input,
            &state.catalog,
            state.availability.as_ref(),
        );
        let notification = session.form.submit();
        let severity = notification.severity;
        session.notifications.push(notification);
        severity
    });

    let target = match access.value {
        Severity::Normal => "/",
        Severity::Error => "/booking",
    };
    with_session_cookie(Redirect::to(target).into_response(), &access)
}

pub(crate) async fn close_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let id = session_id(&headers);
    let access = state.sessions.with(id.as_deref(), |session| session.form.close());
    with_session_cookie(Redirect::to("/").into_response(), &access)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::StaticAvailability;

    fn input() -> BookingInput {
        BookingInput {
            service_id: "1".into(),
            staff_id: "2".into(),
            date: "2024-06-01".into(),
            time: Some("10:00".into()),
            client_name: "Ivan Petrov".into(),
            client_phone: "+7 999 123 45 67".into(),
        }
    }

    fn apply(input: BookingInput) -> BookingSelection {
        let mut selection = BookingSelection::default();
        apply_input(
            &mut selection,
            input,
            &Catalog::fixture(),
            &StaticAvailability::default(),
        );
        selection
    }

    #[test]
    fn test_apply_valid_input() {
        let s = apply(input());
        assert_eq!(s.service_id(), Some(1));
        assert_eq!(s.staff_id(), Some(2));
        assert_eq!(s.date(), NaiveDate::from_ymd_opt(2024, 6, 1));
        assert_eq!(s.time(), Some("10:00"));
        assert!(s.is_complete());
    }

    #[test]
    fn test_unavailable_slot_rejected() {
        let s = apply(BookingInput {
            time: Some("11:00".into()),
            ..input()
        });
        assert_eq!(s.time(), None);
        assert!(!s.is_complete());
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let s = apply(BookingInput {
            service_id: "42".into(),
            staff_id: "abc".into(),
            ..input()
        });
        assert_eq!(s.service_id(), None);
        assert_eq!(s.staff_id(), None);
    }

    #[test]
    fn test_malformed_date_rejected() {
        let s = apply(BookingInput {
            date: "01/06/2024".into(),
            ..input()
        });
        assert_eq!(s.date(), None);
    }

    #[test]
    fn test_names_kept_verbatim() {
        let s = apply(BookingInput {
            client_name: "  Ivan ".into(),
            client_phone: String::new(),
            ..input()
        });
        assert_eq!(s.client_name(), "  Ivan ");
        assert_eq!(s.client_phone(), "");
    }
}
