mod engine_tests;

use crate::database::models::{Employee, Location, NewEmployee};
use crate::database::Store;
use chrono::NaiveDate;

pub async fn memory_store() -> Store {
    Store::in_memory().await.expect("in-memory store")
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub async fn seed_location(store: &Store, name: &str) -> Location {
    store.create_location(name).await.expect("location")
}

pub async fn seed_employee(
    store: &Store,
    location_id: i64,
    name: &str,
    daily_rate: i64,
) -> Employee {
    store
        .create_employee(&NewEmployee {
            name: name.to_string(),
            role: "Mozo".to_string(),
            daily_rate,
            location_id,
        })
        .await
        .expect("employee")
}

/// One location with a single employee at the given daily rate.
pub async fn seed_solo_employee(store: &Store, daily_rate: i64) -> Employee {
    let location = seed_location(store, "UMO").await;
    seed_employee(store, location.id, "Jose Humano", daily_rate).await
}
