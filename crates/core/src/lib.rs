//! # Barbershop Core
//!
//! Domain types and rules shared by the API and database crates: the error
//! type, request/response models, calendar helpers, account and booking rules
//! and the provider availability calculator.

pub mod account;
pub mod availability;
pub mod booking;
pub mod calendar;
pub mod errors;
pub mod models;
