pub mod booking;
pub mod landing;
pub mod session;
pub mod views;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config;
use crate::fixtures::{AvailabilityProvider, Catalog, StaticAvailability};
use crate::models::{Config, SalonConfig};
use session::Sessions;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) salon: Arc<SalonConfig>,
    pub(crate) timezone: Tz,
    pub(crate) catalog: Arc<Catalog>,
    pub(crate) availability: Arc<dyn AvailabilityProvider>,
    pub(crate) sessions: Sessions,
}

impl AppState {
    pub(crate) fn new(config: &Config, availability: Arc<dyn AvailabilityProvider>) -> Result<Self> {
        Ok(Self {
            salon: Arc::new(config.salon.clone()),
            timezone: config::salon_timezone(&config.salon)?,
            catalog: Arc::new(Catalog::fixture()),
            availability,
            sessions: Sessions::new(config::session_ttl(&config.server)?),
        })
    }
}

/// Today's date at the salon.
pub(crate) fn today(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::landing_handler))
        .route(
            "/booking",
            get(booking::open_handler).post(booking::submit_handler),
        )
        .route("/booking/close", post(booking::close_handler))
        .route("/api/catalog", get(landing::catalog_handler))
        .route("/healthz", get(landing::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: Config, addr: &str) -> Result<()> {
    let state = AppState::new(&config, Arc::new(StaticAvailability::default()))?;
    info!(
        "{}: {} staff, {} services",
        state.salon.name,
        state.catalog.staff.len(),
        state.catalog.services.len()
    );

    let app = router(state);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Salon site listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
