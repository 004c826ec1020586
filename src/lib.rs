//! # XP Progress Dashboard Library
//!
//! `xpstats` signs a user in against a GraphQL learning platform, fetches
//! their user, transaction, result, object and event records, derives a few
//! aggregate statistics and draws three SVG charts: cumulative XP over time,
//! pass/fail ratio and XP per event.
//!
//! ## Features
//!
//! - HTTP Basic sign-in returning a bearer session
//! - GraphQL fetches with 401 handling and error banners
//! - Total XP, completed projects and success rate
//! - Daily cumulative and per-event XP series
//! - Pie geometry for the pass/fail chart
//! - SVG rendering with `plotters`
//!
//! ## Example
//!
//! ```no_run
//! use xpstats::api::{http_client, load_profile, sign_in, GraphqlClient};
//! use xpstats::app::{draw_ui, App};
//! use xpstats::config::Config;
//!
//! # async fn run() -> xpstats::error::Result<()> {
//! let config = Config::default();
//! let http = http_client(&config)?;
//! let mut app = App::start(None);
//!
//! let session = sign_in(&http, &config.signin_url, "login", "password").await;
//! app.on_sign_in(session);
//!
//! if let Some(session) = app.session().cloned() {
//!     let client = GraphqlClient::new(http, config.api_url.clone(), session);
//!     app.on_profile_loaded(load_profile(&client).await, &config);
//! }
//! println!("{}", draw_ui(&app));
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod plotting;
pub mod types;
pub mod utils;

// Re-export main types for convenience
pub use app::App as XpStatsApp;
pub use types::{DailyPoint, EventXp, ProfileData};
