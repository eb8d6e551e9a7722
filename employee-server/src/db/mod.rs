//! Database layer - models and in-memory repositories

pub mod models;
pub mod repository;
