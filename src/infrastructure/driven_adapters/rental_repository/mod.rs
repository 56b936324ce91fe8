//! Rental Repository Adapters

mod postgres;

pub use postgres::PostgresRentalRepository;
