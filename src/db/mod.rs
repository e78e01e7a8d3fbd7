pub mod connection;
pub mod queries;
pub mod source;

pub use connection::open_connection;
pub use queries::*;
pub use source::{PartnerSource, PgPartnerSource};

#[cfg(test)]
pub use source::MockPartnerSource;
