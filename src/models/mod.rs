pub mod partner;
pub mod snapshot;

pub use partner::{PartnerRow, PartnerSummary};
pub use snapshot::{CardPlacement, Snapshot};
