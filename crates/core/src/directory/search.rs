//! Case-insensitive list filtering

use salonlite_domain::{Customer, SavedService, Technician};

/// A record that can be matched against a search box
pub trait Searchable {
    /// `needle` is already lower-cased; `raw` is the query as typed.
    fn matches(&self, needle: &str, raw: &str) -> bool;
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn optional_contains(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|value| contains_folded(value, needle))
}

impl Searchable for Customer {
    fn matches(&self, needle: &str, raw: &str) -> bool {
        contains_folded(&self.first_name, needle)
            || contains_folded(&self.last_name, needle)
            || optional_contains(self.email.as_deref(), needle)
            || self.phone.as_deref().is_some_and(|phone| phone.contains(raw))
    }
}

impl Searchable for Technician {
    fn matches(&self, needle: &str, raw: &str) -> bool {
        contains_folded(&self.name, needle)
            || optional_contains(self.email.as_deref(), needle)
            || self.phone.as_deref().is_some_and(|phone| phone.contains(raw))
    }
}

impl Searchable for SavedService {
    fn matches(&self, needle: &str, _raw: &str) -> bool {
        contains_folded(&self.code, needle)
            || contains_folded(&self.name, needle)
            || optional_contains(self.description.as_deref(), needle)
    }
}

/// Records matching `query`; a blank query matches everything.
pub fn filter<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    let raw = query.trim();
    if raw.is_empty() {
        return records.iter().collect();
    }
    let needle = raw.to_lowercase();
    records.iter().filter(|record| record.matches(&needle, raw)).collect()
}

/// Loaded records plus the current search box contents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryView<T> {
    records: Vec<T>,
    query: String,
}

impl<T: Searchable> DirectoryView<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self { records, query: String::new() }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn replace_records(&mut self, records: Vec<T>) {
        self.records = records;
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn visible(&self) -> Vec<&T> {
        filter(&self.records, &self.query)
    }

    /// e.g. `Showing 3 of 10 customers`
    pub fn summary_line(&self, noun: &str) -> String {
        format!("Showing {} of {} {}", self.visible().len(), self.records.len(), noun)
    }
}
