//! Common test fixtures

#![allow(dead_code)]

use std::path::PathBuf;

use datalens_cli::session::Session;
use datalens_interchange::load_table;
use tempfile::TempDir;

pub const EMPLOYEES_CSV: &str = "\
Name,Age,Department,Salary
Ali,28,IT,5200
Bob,35,HR,4100.5
Carla,42,IT,
Dana,,Sales,3900
Eve,23,IT,2800
Faisal,35,Sales,4700
Ghada,31,HR,4400
";

/// A temporary directory holding `employees.csv`
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        std::fs::write(dir.path().join("employees.csv"), EMPLOYEES_CSV).expect("write fixture");
        Self { dir }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn session(&self) -> Session {
        let table = load_table(self.path("employees.csv")).expect("load fixture");
        Session::new(table, 5).expect("create session")
    }
}
