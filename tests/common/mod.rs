#![allow(dead_code)]

use async_trait::async_trait;
use axum::extract::ConnectInfo;
use chrono::{DateTime, Duration, Utc};
use linklet::application::services::{LinkService, StatsService};
use linklet::domain::entities::{Click, NewClick, NewShortLink, ShortLink};
use linklet::domain::geo::{GeoInfo, GeoLocator};
use linklet::domain::repositories::{ClickRepository, LinkRepository};
use linklet::error::AppError;
use linklet::state::AppState;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};
use tower::Layer;

/// Base URL the test state builds short links from.
pub const BASE_URL: &str = "https://s.test";

/// In-memory [`LinkRepository`] with the same conflict semantics as the
/// PostgreSQL implementation: duplicate codes are rejected regardless of
/// expiry.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<ShortLink>>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }

    pub fn get(&self, code: &str) -> Option<ShortLink> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.code == code)
            .cloned()
    }

    /// Seeds a link with explicit timestamps, bypassing validation.
    pub fn seed(
        &self,
        code: &str,
        url: &str,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> ShortLink {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let link = ShortLink::new(
            id,
            code.to_string(),
            url.to_string(),
            created_at,
            expires_at,
            0,
        );
        self.links.lock().unwrap().push(link.clone());
        link
    }

    /// Seeds a link valid for the next hour.
    pub fn seed_active(&self, code: &str, url: &str) -> ShortLink {
        let now = Utc::now();
        self.seed(code, url, now, now + Duration::hours(1))
    }

    /// Seeds a link that expired an hour ago.
    pub fn seed_expired(&self, code: &str, url: &str) -> ShortLink {
        let now = Utc::now();
        self.seed(code, url, now - Duration::hours(2), now - Duration::hours(1))
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|link| link.code == new_link.code) {
            return Err(AppError::conflict(
                "Shortcode already in use",
                json!({ "code": new_link.code }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let link = ShortLink::new(
            id,
            new_link.code,
            new_link.long_url,
            new_link.created_at,
            new_link.expires_at,
            0,
        );
        links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|link| link.code == code)
            .cloned())
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        let mut links = self.links.lock().unwrap();

        if let Some(link) = links.iter_mut().find(|link| link.id == id) {
            link.clicks += 1;
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.lock().unwrap().len() as i64)
    }
}

/// In-memory append-only click log.
#[derive(Default)]
pub struct InMemoryClickRepository {
    clicks: Mutex<Vec<Click>>,
    next_id: AtomicI64,
}

impl InMemoryClickRepository {
    pub fn click_count(&self) -> usize {
        self.clicks.lock().unwrap().len()
    }

    pub fn all(&self) -> Vec<Click> {
        self.clicks.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClickRepository for InMemoryClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let click = Click::new(
            id,
            new_click.link_id,
            new_click.clicked_at,
            new_click.referrer,
            new_click.ip,
            new_click.geo.country,
            new_click.geo.region,
            new_click.geo.city,
        );
        self.clicks.lock().unwrap().push(click.clone());

        Ok(click)
    }

    async fn list_by_link(&self, link_id: i64) -> Result<Vec<Click>, AppError> {
        let mut clicks: Vec<Click> = self
            .clicks
            .lock()
            .unwrap()
            .iter()
            .filter(|click| click.link_id == link_id)
            .cloned()
            .collect();
        clicks.sort_by(|a, b| b.clicked_at.cmp(&a.clicked_at).then(b.id.cmp(&a.id)));

        Ok(clicks)
    }
}

/// Geolocator answering every lookup with the same fixed result.
pub struct StaticGeoLocator(pub Option<GeoInfo>);

#[async_trait]
impl GeoLocator for StaticGeoLocator {
    async fn lookup(&self, _ip: &str) -> Option<GeoInfo> {
        self.0.clone()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Application state plus handles to the underlying fakes.
pub struct TestContext {
    pub state: AppState,
    pub links: Arc<InMemoryLinkRepository>,
    pub clicks: Arc<InMemoryClickRepository>,
}

/// Builds test state without geolocation.
pub fn create_test_state() -> TestContext {
    create_test_state_with_geo(StaticGeoLocator(None))
}

/// Builds test state with the given geolocator.
pub fn create_test_state_with_geo(geo: StaticGeoLocator) -> TestContext {
    let links = Arc::new(InMemoryLinkRepository::default());
    let clicks = Arc::new(InMemoryClickRepository::default());
    let geo: Arc<dyn GeoLocator> = Arc::new(geo);

    let link_service = Arc::new(LinkService::new(links.clone(), clicks.clone(), geo.clone()));
    let stats_service = Arc::new(StatsService::new(links.clone(), clicks.clone()));

    let state = AppState::new(
        link_service,
        stats_service,
        geo.name(),
        BASE_URL.to_string(),
    );

    TestContext {
        state,
        links,
        clicks,
    }
}

/// Injects a fixed peer address so handlers using `ConnectInfo` work under
/// `axum_test::TestServer`, which has no real TCP connection.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

/// Peer address injected by [`MockConnectInfoLayer`].
pub const TEST_PEER_IP: &str = "127.0.0.1";

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{TEST_PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
