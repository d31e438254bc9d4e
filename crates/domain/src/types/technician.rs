//! Technician records

use serde::{Deserialize, Serialize};

pub type TechId = i64;

/// Technician as returned by `GET /technicians/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Technician {
    #[serde(rename = "TechID")]
    pub id: TechId,
    #[serde(rename = "TechName", default)]
    pub name: String,
    #[serde(rename = "TechEmail", default)]
    pub email: Option<String>,
    #[serde(rename = "TechPhone", default)]
    pub phone: Option<String>,
    #[serde(rename = "TechInfo", default)]
    pub info: Option<String>,
    #[serde(rename = "TechAddress", default)]
    pub address: Option<String>,
}

impl Technician {
    /// Editable copy of this record.
    pub fn to_draft(&self) -> TechnicianDraft {
        TechnicianDraft {
            name: self.name.clone(),
            phone: self.phone.clone().unwrap_or_default(),
            email: self.email.clone().unwrap_or_default(),
            info: self.info.clone().unwrap_or_default(),
            address: self.address.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /technicians/` and `PUT /technicians/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicianDraft {
    #[serde(rename = "TechName")]
    pub name: String,
    #[serde(rename = "TechPhone")]
    pub phone: String,
    #[serde(rename = "TechEmail")]
    pub email: String,
    #[serde(rename = "TechInfo")]
    pub info: String,
    #[serde(rename = "TechAddress")]
    pub address: String,
}
