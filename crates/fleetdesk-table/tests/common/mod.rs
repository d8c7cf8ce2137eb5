//! Shared fixtures for table engine integration tests.

use std::sync::Arc;

use uuid::Uuid;

use fleetdesk_core::{SearchConfig, SortValue, TableRow, TableSchema};
use fleetdesk_table::TableSession;

#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: Uuid,
    pub make: String,
    pub model: String,
    pub status: String,
    pub daily_rate: Option<f64>,
}

impl Vehicle {
    pub fn new(make: &str, model: &str, status: &str, daily_rate: Option<f64>) -> Self {
        Self {
            id: Uuid::new_v4(),
            make: make.to_string(),
            model: model.to_string(),
            status: status.to_string(),
            daily_rate,
        }
    }
}

impl TableRow for Vehicle {
    type Id = Uuid;

    fn row_id(&self) -> Uuid {
        self.id
    }
}

pub fn schema() -> TableSchema<Vehicle> {
    TableSchema::new()
        .with_category(
            "status",
            Arc::new(|v: &Vehicle| Some(v.status.clone())),
        )
        .with_sort_field(
            "make",
            Arc::new(|v: &Vehicle| SortValue::Text(v.make.clone())),
        )
        .with_sort_field(
            "daily_rate",
            Arc::new(|v: &Vehicle| {
                v.daily_rate.map(SortValue::Number).unwrap_or(SortValue::Missing)
            }),
        )
}

pub fn search_config() -> SearchConfig<Vehicle> {
    SearchConfig::new(0.7)
        .with_field("make", 2.0, Arc::new(|v: &Vehicle| Some(v.make.clone())))
        .with_field("model", 1.0, Arc::new(|v: &Vehicle| Some(v.model.clone())))
}

/// Five vehicles matching the makes used throughout the suite.
pub fn small_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Honda", "Civic", "active", Some(55.0)),
        Vehicle::new("Toyota", "Corolla", "active", Some(40.0)),
        Vehicle::new("Honda", "Accord", "snoozed", None),
        Vehicle::new("Ford", "Focus", "active", Some(40.0)),
        Vehicle::new("Toyota", "Camry", "active", Some(70.0)),
    ]
}

/// A larger fleet where rows 0, 5, 10, ... are Hondas.
pub fn large_fleet(count: usize) -> Vec<Vehicle> {
    (0..count)
        .map(|i| {
            let make = match i % 5 {
                0 => "Honda",
                1 => "Toyota",
                2 => "Ford",
                3 => "Chevrolet",
                _ => "Nissan",
            };
            Vehicle::new(make, &format!("Model {i}"), "active", Some(30.0 + i as f64))
        })
        .collect()
}

pub fn session(fleet: Vec<Vehicle>, page_size: usize) -> TableSession<Vehicle> {
    TableSession::new(fleet, schema(), search_config(), page_size)
}
