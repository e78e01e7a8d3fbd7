pub mod discount;
pub mod layout;
pub mod loader;

pub use discount::{discount_tier, DiscountTier};
pub use layout::CardLayout;
pub use loader::DashboardService;
