use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::handlers::{protected, public};
use crate::state::AppState;

/// Full portal router. CORS is layered on separately by [`with_cors`].
pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(public::health::root))
        .route("/health", get(public::health::health))
        .merge(session_routes())
        // Backend resources
        .merge(donor_routes())
        .merge(donation_routes())
        .merge(project_routes())
        .merge(campaign_routes())
        .merge(manager_routes())
        .merge(partner_routes())
        .merge(feedback_routes())
        // Global middleware
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Wrap `router` in a CORS layer when the configuration enables one.
pub fn with_cors(router: Router, security: &SecurityConfig) -> Router {
    if !security.enable_cors {
        return router;
    }
    router.layer(cors_layer(security))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin '{}'", origin);
                None
            }
        })
        .collect();

    // Credentials rule out wildcards, so methods and headers are listed.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
}

fn session_routes() -> Router<AppState> {
    use axum::routing::post;
    use protected::onboarding;
    use public::session;

    Router::new()
        .route("/api/auth/login", post(session::login))
        .route("/api/auth/signup", post(session::signup))
        .route("/api/auth/logout", post(session::logout))
        .route("/api/auth/session", get(session::session))
        // Needs the cookie set by signup
        .route("/api/auth/onboarding", post(onboarding::onboarding))
}

fn donor_routes() -> Router<AppState> {
    use protected::donors;

    Router::new()
        .route("/api/donors", get(donors::list))
        .route("/api/donors/:id", get(donors::get).put(donors::update))
        .route("/api/donors/:id/donations", get(donors::donations))
}

fn donation_routes() -> Router<AppState> {
    use protected::donations;

    Router::new()
        .route("/api/donations", get(donations::list).post(donations::create))
        .route("/api/donations/:id", get(donations::get))
}

fn project_routes() -> Router<AppState> {
    use axum::routing::patch;
    use protected::{applications, donation_projects, volunteer_projects};

    Router::new()
        .route(
            "/api/donation-projects",
            get(donation_projects::list).post(donation_projects::create),
        )
        .route(
            "/api/donation-projects/:id",
            get(donation_projects::get)
                .put(donation_projects::update)
                .delete(donation_projects::delete),
        )
        .route(
            "/api/volunteer-projects",
            get(volunteer_projects::list).post(volunteer_projects::create),
        )
        .route(
            "/api/volunteer-projects/:id",
            get(volunteer_projects::get)
                .put(volunteer_projects::update)
                .delete(volunteer_projects::delete),
        )
        .route("/api/volunteer-projects/:id/status", patch(volunteer_projects::update_status))
        .route(
            "/api/volunteer-projects/:id/applications",
            get(volunteer_projects::applications).post(volunteer_projects::apply),
        )
        // Applications across projects
        .route("/api/applications", get(applications::list))
        .route("/api/applications/:id/status", patch(applications::update_status))
}

fn campaign_routes() -> Router<AppState> {
    use axum::routing::post;
    use protected::email_campaigns;

    Router::new()
        .route(
            "/api/email-campaigns",
            get(email_campaigns::list).post(email_campaigns::create),
        )
        .route(
            "/api/email-campaigns/:id",
            get(email_campaigns::get)
                .put(email_campaigns::update)
                .delete(email_campaigns::delete),
        )
        .route("/api/email-campaigns/:id/send", post(email_campaigns::send))
}

fn manager_routes() -> Router<AppState> {
    use protected::managers;

    Router::new()
        .route("/api/managers", get(managers::list).post(managers::create))
        .route(
            "/api/managers/:id",
            get(managers::get).put(managers::update).delete(managers::delete),
        )
}

fn partner_routes() -> Router<AppState> {
    use protected::partners;

    Router::new()
        .route("/api/partners", get(partners::list))
        // Static segment wins over `:id`
        .route("/api/partners/profile", get(partners::profile).put(partners::update_profile))
        .route("/api/partners/:id", get(partners::get))
}

fn feedback_routes() -> Router<AppState> {
    use axum::routing::delete;
    use protected::feedback;

    Router::new()
        .route("/api/feedback", get(feedback::list).post(feedback::create))
        .route("/api/feedback/:id", delete(feedback::delete))
}
