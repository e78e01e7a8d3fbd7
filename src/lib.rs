pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use db::{PartnerSource, PgPartnerSource};
pub use error::{ConfigError, LoadError};
pub use models::{CardPlacement, PartnerSummary, Snapshot};
pub use service::{discount_tier, CardLayout, DashboardService, DiscountTier};
