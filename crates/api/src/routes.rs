pub mod appointment;
pub mod health;
pub mod provider;
pub mod user;
