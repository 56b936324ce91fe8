//! Vehicle Repository Adapters

mod postgres;

pub use postgres::PostgresVehicleRepository;
