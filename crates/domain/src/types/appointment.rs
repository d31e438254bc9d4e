//! Appointments and the services booked inside them

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};

use super::customer::{Customer, CustomerId};
use super::technician::TechId;
use super::wire;
use crate::impl_wire_enum_conversions;

pub type AppointmentId = i64;

/// Appointment lifecycle as stored by the backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Open,
    Pending,
    Closed,
    Cancelled,
}

impl_wire_enum_conversions!(AppointmentStatus {
    Open => "Open",
    Pending => "Pending",
    Closed => "Closed",
    Cancelled => "Cancelled",
});

impl AppointmentStatus {
    pub const ALL: [Self; 4] = [Self::Open, Self::Pending, Self::Closed, Self::Cancelled];

    /// Human label shown on forms and the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "Scheduled",
            Self::Pending => "Checked In",
            Self::Closed => "Closed",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentType {
    #[default]
    Cash,
    CreditCard,
    DebitCard,
    Check,
}

impl_wire_enum_conversions!(PaymentType {
    Cash => "cash",
    CreditCard => "credit_card",
    DebitCard => "debit_card",
    Check => "check",
});

impl PaymentType {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::Check => "Check",
        }
    }
}

/// `CustomerID` is a bare id on some endpoints and an expanded record on
/// others.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Id(CustomerId),
    Record(Customer),
}

impl CustomerRef {
    pub fn id(&self) -> CustomerId {
        match self {
            Self::Id(id) => *id,
            Self::Record(customer) => customer.id,
        }
    }
}

/// One service booked inside an appointment
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceLine {
    #[serde(rename = "ServiceName", default)]
    pub name: String,
    #[serde(rename = "ServiceCode", default)]
    pub code: String,
    #[serde(rename = "ServiceStartTime", with = "wire::clock_time")]
    pub start_time: NaiveTime,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "ServiceDuration", default)]
    pub duration_minutes: u32,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(rename = "ServicePrice", default)]
    pub price: f64,
    #[serde(rename = "ServiceComment", default)]
    pub comment: Option<String>,
    #[serde(rename = "TechID")]
    pub tech_id: TechId,
}

/// Appointment as returned by `GET /appointments/?Date=`
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "AppID")]
    pub id: AppointmentId,
    #[serde(rename = "AppDate")]
    pub date: NaiveDate,
    #[serde(rename = "AppStatus", default)]
    pub status: AppointmentStatus,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(rename = "AppTotal", default)]
    pub total: Option<f64>,
    #[serde(rename = "PaymentType", default)]
    pub payment_type: Option<PaymentType>,
    #[serde(rename = "CustomerID", default)]
    pub customer_ref: Option<CustomerRef>,
    #[serde(rename = "Customer", default)]
    pub customer: Option<Customer>,
    #[serde(rename = "Services", default)]
    pub services: Vec<ServiceLine>,
}

impl Appointment {
    /// Embedded customer record, from either `Customer` or an expanded
    /// `CustomerID`.
    pub fn customer_record(&self) -> Option<&Customer> {
        self.customer.as_ref().or(match &self.customer_ref {
            Some(CustomerRef::Record(customer)) => Some(customer),
            _ => None,
        })
    }

    pub fn customer_id(&self) -> Option<CustomerId> {
        self.customer_ref
            .as_ref()
            .map(CustomerRef::id)
            .or_else(|| self.customer.as_ref().map(|c| c.id))
    }
}

/// Body of `POST /appointments/` and `PUT /appointments/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentDraft {
    #[serde(rename = "AppDate")]
    pub date: NaiveDate,
    /// Sum of service prices, two decimals.
    #[serde(rename = "AppTotal")]
    pub total: String,
    #[serde(rename = "PaymentType")]
    pub payment_type: PaymentType,
    #[serde(rename = "AppStatus")]
    pub status: AppointmentStatus,
    #[serde(rename = "CustomerID")]
    pub customer_id: CustomerId,
    #[serde(rename = "Services")]
    pub services: Vec<ServiceLine>,
}
