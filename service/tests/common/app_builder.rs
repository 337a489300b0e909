//! Test app builder that mirrors main.rs wiring with injectable datasets.
//!
//! This module provides a [`TestAppBuilder`] that constructs an Axum router matching
//! the production configuration in `main.rs`, but with the ability to inject
//! in-memory rosters and test-specific configurations instead of reading the
//! on-disk datasets.
//!
//! # Usage
//!
//! ```ignore
//! use crate::common::app_builder::TestAppBuilder;
//!
//! #[tokio::test]
//! async fn test_with_full_app() {
//!     let app = TestAppBuilder::new()
//!         .with_sample_legislators()
//!         .with_sample_districts()
//!         .with_cors(&["http://localhost:3000"])
//!         .build();
//!
//!     // Use app.oneshot(...) to send requests
//! }
//! ```
//!
//! # Preset Builders
//!
//! - [`TestAppBuilder::minimal()`] - Health check only
//! - [`TestAppBuilder::with_sample_data()`] - Lookup routes over sample rosters
//! - [`TestAppBuilder::full()`] - Sample rosters plus CORS, security headers, Swagger

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method, StatusCode},
    middleware,
    response::IntoResponse,
    routing::get,
    Extension, Router,
};
use civiclookup_api::{
    config::SecurityHeadersConfig,
    context::AppContext,
    http::security::{build_security_headers, security_headers_middleware},
    kansas::{self, districts::DistrictRegistry, types::DistrictRow},
    legislators::{self, types::Legislator},
    openapi::ApiDoc,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Shared secret every preset app expects on requests.
pub const TEST_KEY: &str = "test-key";

/// Geography layer name used by the sample geocoder payloads.
pub const TEST_LAYER: &str = "2024 State Legislative Districts - Upper";

/// Health check handler (mirrors main.rs)
async fn health_check() -> impl IntoResponse {
    StatusCode::OK
}

/// Sample legislator roster: two senators with distinct name forms.
#[must_use]
pub fn sample_legislators() -> Vec<Legislator> {
    serde_yaml::from_str(
        r"
- id:
    bioguide: M000934
  name:
    first: Jerry
    last: Moran
    official_full: Jerry Moran
  bio:
    gender: M
    birthday: '1954-05-29'
  terms:
    - type: rep
      start: '1997-01-07'
      end: '2011-01-03'
      state: KS
      district: 1
      party: Republican
    - type: sen
      start: '2023-01-03'
      end: '2029-01-03'
      state: KS
      party: Republican
      state_rank: senior
      address: 521 Dirksen Senate Office Building Washington DC 20510
      phone: 202-224-6521
- id:
    bioguide: S000033
  name:
    first: Bernard
    last: Sanders
    official_full: Bernard Sanders
    nickname: Bernie
  bio:
    gender: M
    birthday: '1941-09-08'
  terms:
    - type: sen
      start: '2025-01-03'
      end: '2031-01-03'
      state: VT
      party: Independent
      state_rank: senior
",
    )
    .expect("sample roster should parse")
}

/// Sample district roster rows covering the districts the test payloads
/// resolve to.
#[must_use]
pub fn sample_district_rows() -> Vec<DistrictRow> {
    let rows = [
        ("5", "Klemp", "Jeff Klemp", "Jeff.Klemp@senate.ks.gov"),
        ("7", "Warren", "Kellie Warren", "Kellie.Warren@senate.ks.gov"),
        ("19", "Kloos", "Rick Kloos", ""),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (number, name, full_name, email))| DistrictRow {
            fid: (i + 1).to_string(),
            district_code: format!("{number:0>2}"),
            name: (*name).to_string(),
            full_name: (*full_name).to_string(),
            email: (*email).to_string(),
            url: if email.is_empty() {
                String::new()
            } else {
                format!("http://www.kslegislature.org/{}", name.to_lowercase())
            },
            district_number: (*number).to_string(),
            shape_area: "43083841021.9".to_string(),
            shape_length: "1203954.5".to_string(),
        })
        .collect()
}

/// Builder for test applications that mirrors main.rs wiring.
///
/// Use the builder pattern to construct an Axum router with the exact same
/// layer ordering and configuration as production, while allowing injection
/// of in-memory datasets for testing.
pub struct TestAppBuilder {
    /// Whether to include the lookup routes (legislator + Kansas)
    include_lookup: bool,
    /// Whether to include health check route
    include_health: bool,
    /// Whether to include Swagger UI
    include_swagger: bool,
    /// Legislator roster served by the app
    legislators: Vec<Legislator>,
    /// District roster rows served by the app
    district_rows: Vec<DistrictRow>,
    /// Shared secret the app expects
    api_key: String,
    /// Geography layer name for upper-chamber districts
    upper_chamber_layer: String,
    /// CORS allowed origins (None means no CORS layer)
    cors_origins: Option<Vec<String>>,
    /// Security headers config (None means disabled)
    security_headers: Option<SecurityHeadersConfig>,
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestAppBuilder {
    /// Create a new empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_lookup: false,
            include_health: false,
            include_swagger: false,
            legislators: Vec::new(),
            district_rows: Vec::new(),
            api_key: TEST_KEY.to_string(),
            upper_chamber_layer: TEST_LAYER.to_string(),
            cors_origins: None,
            security_headers: None,
        }
    }

    // =========================================================================
    // Preset Builders
    // =========================================================================

    /// Create a minimal app with only the health check endpoint.
    ///
    /// Use this for simple connectivity tests.
    #[must_use]
    pub fn minimal() -> Self {
        Self::new().with_health()
    }

    /// Create an app serving the lookup routes over the sample rosters.
    #[must_use]
    pub fn with_sample_data() -> Self {
        Self::new()
            .with_lookup()
            .with_sample_legislators()
            .with_sample_districts()
            .with_health()
    }

    /// Create a full app mirroring production main.rs wiring.
    ///
    /// Includes all routes, the sample rosters, CORS, security headers,
    /// and Swagger UI.
    #[must_use]
    pub fn full() -> Self {
        Self::with_sample_data()
            .with_swagger()
            .with_cors(&["http://localhost:3000"])
            .with_security_headers_default()
    }

    // =========================================================================
    // Component Configuration
    // =========================================================================

    /// Include the lookup routes (/api/legislator*, /api/kansas/*).
    #[must_use]
    pub fn with_lookup(mut self) -> Self {
        self.include_lookup = true;
        self
    }

    /// Include health check route (/health).
    #[must_use]
    pub fn with_health(mut self) -> Self {
        self.include_health = true;
        self
    }

    /// Include Swagger UI (/swagger-ui).
    #[must_use]
    pub fn with_swagger(mut self) -> Self {
        self.include_swagger = true;
        self
    }

    /// Serve the sample legislator roster.
    #[must_use]
    pub fn with_sample_legislators(mut self) -> Self {
        self.legislators = sample_legislators();
        self
    }

    /// Serve a custom legislator roster.
    #[must_use]
    pub fn with_legislators(mut self, legislators: Vec<Legislator>) -> Self {
        self.legislators = legislators;
        self
    }

    /// Serve the sample district roster.
    #[must_use]
    pub fn with_sample_districts(mut self) -> Self {
        self.district_rows = sample_district_rows();
        self
    }

    /// Serve a custom district roster.
    #[must_use]
    pub fn with_districts(mut self, rows: Vec<DistrictRow>) -> Self {
        self.district_rows = rows;
        self
    }

    /// Expect a custom shared secret instead of [`TEST_KEY`].
    #[must_use]
    pub fn with_api_key(mut self, key: &str) -> Self {
        self.api_key = key.to_string();
        self
    }

    /// Resolve geocoder payloads against a custom geography layer name.
    #[must_use]
    pub fn with_upper_chamber_layer(mut self, layer: &str) -> Self {
        self.upper_chamber_layer = layer.to_string();
        self
    }

    /// Configure CORS with specific allowed origins.
    ///
    /// Pass an empty slice to block all cross-origin requests.
    /// Pass `&["*"]` to allow any origin.
    #[must_use]
    pub fn with_cors(mut self, origins: &[&str]) -> Self {
        self.cors_origins = Some(origins.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Enable security headers with default configuration.
    #[must_use]
    pub fn with_security_headers_default(mut self) -> Self {
        self.security_headers = Some(SecurityHeadersConfig::default());
        self
    }

    /// Enable security headers with custom configuration.
    #[must_use]
    pub fn with_security_headers(mut self, config: SecurityHeadersConfig) -> Self {
        self.security_headers = Some(config);
        self
    }

    // =========================================================================
    // Build
    // =========================================================================

    /// Build the Axum router.
    ///
    /// The layer ordering matches main.rs exactly:
    /// 1. Routes (legislator lookup, Kansas lookup, health, Swagger)
    /// 2. Extension (shared `AppContext`)
    /// 3. CORS layer
    /// 4. Security headers middleware (outermost)
    #[must_use]
    pub fn build(self) -> Router {
        let context = Arc::new(AppContext {
            legislators: self.legislators,
            districts: DistrictRegistry::from_rows(self.district_rows),
            api_key: self.api_key,
            upper_chamber_layer: self.upper_chamber_layer,
        });

        // Start building the router
        let mut app = Router::new();

        // Add routes
        if self.include_lookup {
            app = app
                .merge(legislators::http::router())
                .merge(kansas::http::router());
        }

        if self.include_swagger {
            app = app.merge(
                SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()),
            );
        }

        if self.include_health {
            app = app.route("/health", get(health_check));
        }

        // Share the rosters with every handler
        app = app.layer(Extension(context));

        // Add CORS layer if configured
        if let Some(origins) = self.cors_origins {
            let allow_origin: AllowOrigin = if origins.iter().any(|o| o == "*") {
                AllowOrigin::any()
            } else if origins.is_empty() {
                AllowOrigin::list(Vec::<HeaderValue>::new())
            } else {
                let header_values: Vec<HeaderValue> = origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect();
                AllowOrigin::list(header_values)
            };

            app = app.layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers(Any)
                    .allow_origin(allow_origin),
            );
        }

        // Add security headers middleware if configured
        if let Some(config) = self.security_headers {
            if config.enabled {
                let headers = build_security_headers(&config);
                app = app
                    .layer(middleware::from_fn(security_headers_middleware))
                    .layer(Extension(headers));
            }
        }

        app
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_minimal_builder_creates_health_route() {
        let app = TestAppBuilder::minimal().build();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_sample_data_builder_serves_lookup_routes() {
        let app = TestAppBuilder::with_sample_data().build();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/kansas/representative/district/5?key=test-key")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn sample_rosters_are_consistent() {
        assert_eq!(sample_legislators().len(), 2);
        assert_eq!(sample_district_rows().len(), 3);
    }
}
