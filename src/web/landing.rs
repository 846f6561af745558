use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::session::{session_id, set_cookie_value, SessionAccess};
use super::views::{render_page, PageData};
use super::AppState;
use crate::booking::BookingForm;
use crate::fixtures::SlotQuery;
use crate::models::{Service, StaffMember, TimeSlot};

pub(super) fn with_session_cookie<R>(mut response: Response, access: &SessionAccess<R>) -> Response {
    if access.created {
        if let Ok(value) = HeaderValue::from_str(&set_cookie_value(&access.id)) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }
    response
}

/// Apply `update` to the visitor's form, then render the page from a snapshot
/// of it. Queued notifications are drained into this render.
pub(super) fn render_for_session(
    state: &AppState,
    headers: &HeaderMap,
    update: impl FnOnce(&mut BookingForm),
) -> Response {
    let id = session_id(headers);
    let access = state.sessions.with(id.as_deref(), |session| {
        update(&mut session.form);
        (session.form.clone(), std::mem::take(&mut session.notifications))
    });
    let (form, notifications) = &access.value;

    let query = SlotQuery {
        date: form.selection.date(),
        staff_id: form.selection.staff_id(),
        service_id: form.selection.service_id(),
    };
    let slots = state.availability.slots(&query);
    let today = super::today(state.timezone);

    let html = render_page(&PageData {
        salon: &state.salon,
        catalog: &state.catalog,
        slots: &slots,
        form,
        notifications,
        today,
    });
    with_session_cookie(Html(html).into_response(), &access)
}

pub(crate) async fn landing_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    render_for_session(&state, &headers, |_| {})
}

#[derive(Serialize)]
pub(crate) struct CatalogResponse {
    staff: Vec<StaffMember>,
    services: Vec<Service>,
    slots: Vec<TimeSlot>,
}

pub(crate) async fn catalog_handler(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        staff: state.catalog.staff.clone(),
        services: state.catalog.services.clone(),
        slots: state.availability.slots(&SlotQuery::default()),
    })
}

pub(crate) async fn health_handler() -> &'static str {
    "ok"
}
