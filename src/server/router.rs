use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    controller::{
        admin, auth, fitness_class, membership, notification, order, otp, program, realtime,
        revenue, trainer,
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Sustained request rate allowed per client IP on login and OTP routes.
const RATE_LIMIT_PER_SECOND: u64 = 2;
/// Requests a client may burst before the sustained rate applies.
const RATE_LIMIT_BURST: u32 = 5;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "fitstudio API",
        description = "Fitness studio backend: accounts, catalog, OTP checkout, notifications and revenue",
    ),
    tags(
        (name = "auth", description = "Member authentication"),
        (name = "admin", description = "Admin authentication and accounts"),
        (name = "trainer", description = "Trainers"),
        (name = "class", description = "Fitness classes"),
        (name = "program", description = "Training programs"),
        (name = "membership", description = "Membership plans"),
        (name = "otp", description = "One-time passwords"),
        (name = "order", description = "Orders and checkout"),
        (name = "notification", description = "Notification inboxes"),
        (name = "revenue", description = "Revenue reporting"),
        (name = "realtime", description = "Notification websocket")
    ),
    modifiers(&SessionCookieAddon)
)]
struct ApiDoc;

struct SessionCookieAddon;

impl utoipa::Modify for SessionCookieAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "session_cookie",
            utoipa::openapi::security::SecurityScheme::ApiKey(
                utoipa::openapi::security::ApiKey::Cookie(
                    utoipa::openapi::security::ApiKeyValue::new("id"),
                ),
            ),
        );
    }
}

fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(auth::routes())
        .merge(admin::routes())
        .merge(trainer::routes())
        .merge(fitness_class::routes())
        .merge(program::routes())
        .merge(membership::routes())
        .merge(order::routes())
        .merge(notification::routes())
        .merge(revenue::routes())
        .merge(realtime::routes())
}

/// Login and OTP routes, limited per client IP.
fn rate_limited_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(auth::login_routes())
        .merge(admin::login_routes())
        .merge(otp::routes())
}

/// Builds the application router with API documentation, rate limiting, CORS and
/// request tracing.
///
/// The rate limiter keys on the peer address, so the router must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Arguments
/// - `state` - Shared application state
/// - `config` - Application configuration; `app_url` is the allowed CORS origin
///
/// # Returns
/// - `Ok(Router)` - Router ready to be layered with the session manager and served
/// - `Err(ConfigError::InvalidEnvVar)` - `APP_URL` is not a valid header value
/// - `Err(ConfigError::InvalidRateLimit)` - Rate limiter settings rejected
pub fn router(state: AppState, config: &Config) -> Result<Router, AppError> {
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(RATE_LIMIT_PER_SECOND)
        .burst_size(RATE_LIMIT_BURST)
        .finish()
        .ok_or(ConfigError::InvalidRateLimit)?;

    let (api_router, api_spec) = api_routes().split_for_parts();
    let (limited_router, limited_spec) = rate_limited_routes().split_for_parts();

    let mut merged_spec = ApiDoc::openapi();
    merged_spec.merge(api_spec);
    merged_spec.merge(limited_spec);

    let origin = HeaderValue::from_str(&config.app_url).map_err(|_| ConfigError::InvalidEnvVar {
        name: "APP_URL".to_string(),
        value: config.app_url.clone(),
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let router = api_router
        .merge(limited_router.layer(GovernorLayer::new(Arc::new(governor_conf))))
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", merged_spec))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
