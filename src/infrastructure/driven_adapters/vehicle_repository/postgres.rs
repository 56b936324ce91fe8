//! PostgreSQL Vehicle Repository Implementation
//!
//! Implements the VehicleRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::VehicleRepository;
use crate::domain::models::page::PageRequest;
use crate::domain::models::vehicle::{Vehicle, VehicleData, VehicleId};
use crate::shared::errors::RepositoryError;

/// Database row representation for the veiculos table
#[derive(Debug, sqlx::FromRow)]
struct VehicleRow {
    id: i64,
    marca: String,
    modelo: String,
    placa: String,
    ano: i32,
    cor: String,
    valor_diaria: Decimal,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Vehicle::restore(
            VehicleId::new(row.id),
            VehicleData {
                brand: row.marca,
                model: row.modelo,
                plate: row.placa,
                year: row.ano,
                color: row.cor,
                daily_rate: row.valor_diaria,
            },
        )
    }
}

/// PostgreSQL implementation of VehicleRepository
pub struct PostgresVehicleRepository {
    pool: PgPool,
}

impl PostgresVehicleRepository {
    /// Create a new PostgresVehicleRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VehicleRepository for PostgresVehicleRepository {
    async fn find_by_id(&self, id: VehicleId) -> Result<Option<Vehicle>, RepositoryError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, marca, modelo, placa, ano, cor, valor_diaria
            FROM veiculos
            WHERE id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<Vehicle>, RepositoryError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r#"
            SELECT id, marca, modelo, placa, ano, cor, valor_diaria
            FROM veiculos
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    async fn insert(&self, data: &VehicleData) -> Result<Vehicle, RepositoryError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            INSERT INTO veiculos (marca, modelo, placa, ano, cor, valor_diaria)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, marca, modelo, placa, ano, cor, valor_diaria
            "#,
        )
        .bind(&data.brand)
        .bind(&data.model)
        .bind(&data.plate)
        .bind(data.year)
        .bind(&data.color)
        .bind(data.daily_rate)
        .fetch_one(&self.pool)
        .await?;

        Ok(Vehicle::from(row))
    }

    async fn update(&self, vehicle: &Vehicle) -> Result<Option<Vehicle>, RepositoryError> {
        let row = sqlx::query_as::<_, VehicleRow>(
            r#"
            UPDATE veiculos
            SET marca = $2,
                modelo = $3,
                placa = $4,
                ano = $5,
                cor = $6,
                valor_diaria = $7
            WHERE id = $1
            RETURNING id, marca, modelo, placa, ano, cor, valor_diaria
            "#,
        )
        .bind(vehicle.id().value())
        .bind(vehicle.brand())
        .bind(vehicle.model())
        .bind(vehicle.plate())
        .bind(vehicle.year())
        .bind(vehicle.color())
        .bind(vehicle.daily_rate())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Vehicle::from))
    }

    async fn delete(&self, id: VehicleId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM veiculos WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
