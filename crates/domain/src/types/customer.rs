//! Customer records

use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_CUSTOMER;

pub type CustomerId = i64;

/// Customer as returned by `GET /customers/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "CustomerID")]
    pub id: CustomerId,
    #[serde(rename = "CustomerFirstName", default)]
    pub first_name: String,
    #[serde(rename = "CustomerLastName", default)]
    pub last_name: String,
    #[serde(rename = "CustomerEmail", default)]
    pub email: Option<String>,
    #[serde(rename = "CustomerPhone", default)]
    pub phone: Option<String>,
    #[serde(rename = "CustomerAddress", default)]
    pub address: Option<String>,
    #[serde(rename = "CustomerInfo", default)]
    pub info: Option<String>,
}

impl Customer {
    /// "First Last", or the unknown-customer placeholder when both are blank.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            UNKNOWN_CUSTOMER.to_string()
        } else {
            full.to_string()
        }
    }

    pub fn to_draft(&self) -> CustomerDraft {
        CustomerDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
            info: self.info.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /customers/` and `PUT /customers/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDraft {
    #[serde(rename = "CustomerFirstName")]
    pub first_name: String,
    #[serde(rename = "CustomerLastName")]
    pub last_name: String,
    #[serde(rename = "CustomerEmail")]
    pub email: String,
    #[serde(rename = "CustomerPhone")]
    pub phone: String,
    #[serde(rename = "CustomerAddress")]
    pub address: String,
    #[serde(rename = "CustomerInfo")]
    pub info: String,
}
