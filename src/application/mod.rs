//! Application Layer
//!
//! Contains the resource services that orchestrate business logic.
//! Services depend on domain gateways (abstractions), not concrete implementations.

pub mod services;
