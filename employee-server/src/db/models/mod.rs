//! Data models

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeId, EmployeeResponse, EmployeeUpdate};
