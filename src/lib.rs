//! Camp API: REST backend for campers, activities, and signups.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod seed;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use routes::{app, camp_routes, common_routes};
pub use seed::seed_activities;
pub use service::{ActivityService, CamperService, SignupService};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_tables};
