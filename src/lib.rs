//! Locatech API
//!
//! Vehicle rental service: a fleet of vehicles and the rentals booked
//! against them, exposed over a versioned REST API and backed by
//! PostgreSQL. Layered along Clean/Hexagonal Architecture lines.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
