//! Domain models

mod company;
mod product;
mod session;
mod summary;
mod transaction;

pub use company::CompanyDetails;
pub use product::{Product, VatRate};
pub use session::{
    CashDirection, CashEntry, CashManagement, CashReconciliation, SalesSession, SessionStatus,
};
pub use summary::{DailySummary, VatBucket};
pub use transaction::{PaymentMethod, SoldLine, Transaction};
