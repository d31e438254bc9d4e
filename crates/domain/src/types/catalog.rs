//! Saved service catalog entries

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

pub type SavedServiceId = i64;

/// Catalog entry as returned by `GET /savedservices/`
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedService {
    #[serde(rename = "ServiceID")]
    pub id: SavedServiceId,
    #[serde(rename = "ServiceCode", default)]
    pub code: String,
    #[serde(rename = "ServiceName", default)]
    pub name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "ServicePrice", default)]
    pub price: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "ServiceDuration", default)]
    pub duration_minutes: u32,
    #[serde(rename = "ServiceDescription", default)]
    pub description: Option<String>,
}

impl SavedService {
    pub fn to_draft(&self) -> SavedServiceDraft {
        SavedServiceDraft {
            code: self.code.clone(),
            name: self.name.clone(),
            price: self.price,
            duration_minutes: self.duration_minutes,
            description: self.description.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /savedservices/` and `PUT /savedservices/{id}/`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedServiceDraft {
    #[serde(rename = "ServiceCode")]
    pub code: String,
    #[serde(rename = "ServiceName")]
    pub name: String,
    #[serde(rename = "ServicePrice")]
    pub price: f64,
    #[serde(rename = "ServiceDuration")]
    pub duration_minutes: u32,
    #[serde(rename = "ServiceDescription")]
    pub description: String,
}
