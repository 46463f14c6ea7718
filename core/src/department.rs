//! Departments and headcount.
//!
//! Four departments exist for the lifetime of the game; none are
//! created or destroyed after founding, only headcount moves. Salaries
//! are charged once per quarter through the operating-expense aggregate,
//! never at hire or fire time.

use crate::types::Money;
use serde::{Deserialize, Serialize};

pub const ENGINEERING: &str = "Engineering";
pub const SALES: &str = "Sales";
pub const MARKETING: &str = "Marketing";
pub const OPERATIONS: &str = "Operations";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub name: String,
    pub headcount: u32,
    /// Quarterly salary per head.
    pub salary_per_head: Money,
}

impl Department {
    fn new(name: &str, headcount: u32, salary_per_head: Money) -> Self {
        Self {
            name: name.to_string(),
            headcount,
            salary_per_head,
        }
    }

    pub fn quarterly_salaries(&self) -> Money {
        self.headcount as Money * self.salary_per_head
    }
}

/// The fixed founding org chart.
pub fn starting_departments() -> Vec<Department> {
    vec![
        Department::new(ENGINEERING, 5, 35_000.0),
        Department::new(SALES, 3, 28_000.0),
        Department::new(MARKETING, 2, 25_000.0),
        Department::new(OPERATIONS, 4, 27_000.0),
    ]
}
