//! Fitopia Back Office - Gym Management REST API
//!
//! This crate implements the back office for a gym: member records,
//! membership plans and statuses, product catalog, check-in logging,
//! member photos, and transaction accounting over PostgreSQL.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
