//! Shared test helpers for `salonlite-core` integration tests.
//!
//! Fixture builders plus in-memory port implementations, so service tests can
//! focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod repositories;

use chrono::{NaiveDate, NaiveTime};
use salonlite_domain::{Appointment, AppointmentStatus, Customer, ServiceLine, TechId, Technician};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid test time")
}

pub fn technician(id: TechId, name: &str) -> Technician {
    Technician { id, name: name.into(), email: None, phone: None, info: None, address: None }
}

pub fn customer(id: i64, first: &str, last: &str) -> Customer {
    Customer {
        id,
        first_name: first.into(),
        last_name: last.into(),
        email: None,
        phone: None,
        address: None,
        info: None,
    }
}

pub fn line(tech_id: TechId, start: NaiveTime, duration_minutes: u32) -> ServiceLine {
    ServiceLine {
        name: "Manicure".into(),
        code: "MANI".into(),
        start_time: start,
        duration_minutes,
        price: 25.0,
        comment: None,
        tech_id,
    }
}

pub fn appointment(id: i64, on: NaiveDate, services: Vec<ServiceLine>) -> Appointment {
    Appointment {
        id,
        date: on,
        status: AppointmentStatus::Open,
        total: None,
        payment_type: None,
        customer_ref: None,
        customer: Some(customer(100 + id, "Ana", "Lopez")),
        services,
    }
}
