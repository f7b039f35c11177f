//! Company Details Model

use serde::{Deserialize, Serialize};

/// Company details printed in the receipt header and footer.
///
/// Read-only input to the formatters; the core never mutates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyDetails {
    #[serde(default)]
    pub name: String,
    /// Address, one entry per printed line
    #[serde(default)]
    pub address_lines: Vec<String>,
    /// VAT identification number (BTW-nummer)
    #[serde(default)]
    pub vat_number: String,
    pub website: Option<String>,
    /// Message printed at the bottom of every receipt
    #[serde(default)]
    pub footer_message: String,
}
