//! TalentHub: HR CRUD gateway over PostgreSQL.
//!
//! One flat component: HTTP routes for companies, departments, jobs,
//! employees, and candidates, each translating to a single call on the
//! injected [`store::Store`].

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;
pub mod validation;

pub use config::Config;
pub use error::AppError;
pub use migration::apply_migrations;
pub use routes::{api_routes, ops_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, PgStore, Store};
