//! Shared fixtures for the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use struct_record::Reflect;

/// Install a test logger once; later calls are no-ops
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The canonical tagged struct: two tagged public fields and a private one
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct Person {
    #[tag(db = "id")]
    pub ID: i64,
    #[tag(db = "name,omitempty")]
    pub Name: String,
    secret: String,
}

impl Person {
    #[must_use]
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            ID: id,
            Name: name.to_string(),
            secret: "hunter2".to_string(),
        }
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

/// A wider struct covering skipped, blank and multi-namespace tags
#[derive(Debug, Clone, Reflect)]
pub struct Patient {
    #[tag(db = "pnr", json = "patientId")]
    pub pnr: String,
    #[tag(db = "birth_date,omitempty", json = "birthDate")]
    pub birth_date: Option<NaiveDate>,
    #[tag(db = "-", json = "internalNote")]
    pub internal_note: String,
    #[tag(db = "", json = "-")]
    pub scratch: Vec<u8>,
    pub untagged: bool,
    #[tag(db = "age")]
    age: Option<i32>,
}

impl Patient {
    #[must_use]
    pub fn sample() -> Self {
        Self {
            pnr: "0101901234".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1),
            internal_note: "call back".to_string(),
            scratch: vec![1, 2, 3],
            untagged: true,
            age: Some(34),
        }
    }

    #[must_use]
    pub fn age(&self) -> Option<i32> {
        self.age
    }
}
