//! PostgreSQL Rental Repository Implementation
//!
//! Implements the RentalRepository trait using SQLx for PostgreSQL.
//! Renter and vehicle display fields come from `LEFT JOIN`s and are
//! never written.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::domain::gateways::RentalRepository;
use crate::domain::models::page::PageRequest;
use crate::domain::models::rental::{Rental, RentalData, RentalDetails, RentalId, RentalPeriod};
use crate::domain::models::vehicle::VehicleId;
use crate::shared::errors::RepositoryError;

/// Projection shared by every query; expects the rental row aliased as `a`
const SELECT_COLUMNS: &str = r#"
    a.id, a.pessoa_id, p.cpf AS pessoa_cpf, p.nome AS pessoa_nome,
    a.veiculo_id, v.modelo AS veiculo_modelo,
    a.data_inicio, a.data_fim, a.valor_total
"#;

const JOINS: &str = r#"
    LEFT JOIN pessoas p ON p.id = a.pessoa_id
    LEFT JOIN veiculos v ON v.id = a.veiculo_id
"#;

/// Database row representation for the alugueis table plus joined fields
#[derive(Debug, sqlx::FromRow)]
struct RentalRow {
    id: i64,
    pessoa_id: i64,
    pessoa_cpf: Option<String>,
    pessoa_nome: Option<String>,
    veiculo_id: i64,
    veiculo_modelo: Option<String>,
    data_inicio: NaiveDate,
    data_fim: NaiveDate,
    valor_total: Decimal,
}

impl TryFrom<RentalRow> for Rental {
    type Error = RepositoryError;

    fn try_from(row: RentalRow) -> Result<Self, Self::Error> {
        let period = RentalPeriod::new(row.data_inicio, row.data_fim)
            .map_err(|e| RepositoryError::Mapping(format!("Rental {}: {}", row.id, e)))?;
        let data = RentalData::new(row.pessoa_id, VehicleId::new(row.veiculo_id), period, row.valor_total)
            .map_err(|e| RepositoryError::Mapping(format!("Rental {}: {}", row.id, e)))?;

        Ok(Rental::restore(
            RentalId::new(row.id),
            data,
            RentalDetails {
                renter_document: row.pessoa_cpf,
                renter_name: row.pessoa_nome,
                vehicle_model: row.veiculo_modelo,
            },
        ))
    }
}

/// PostgreSQL implementation of RentalRepository
pub struct PostgresRentalRepository {
    pool: PgPool,
}

impl PostgresRentalRepository {
    /// Create a new PostgresRentalRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RentalRepository for PostgresRentalRepository {
    async fn find_by_id(&self, id: RentalId) -> Result<Option<Rental>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM alugueis a {JOINS} WHERE a.id = $1");
        let row = sqlx::query_as::<_, RentalRow>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Rental::try_from).transpose()
    }

    async fn find_page(&self, page: PageRequest) -> Result<Vec<Rental>, RepositoryError> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM alugueis a {JOINS} ORDER BY a.id ASC LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, RentalRow>(&sql)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Rental::try_from).collect()
    }

    async fn insert(&self, data: &RentalData) -> Result<Rental, RepositoryError> {
        let sql = format!(
            r#"
            WITH a AS (
                INSERT INTO alugueis (pessoa_id, veiculo_id, data_inicio, data_fim, valor_total)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
            )
            SELECT {SELECT_COLUMNS} FROM a {JOINS}
            "#
        );
        let row = sqlx::query_as::<_, RentalRow>(&sql)
            .bind(data.renter_id)
            .bind(data.vehicle_id.value())
            .bind(data.period.start())
            .bind(data.period.end())
            .bind(data.total_price)
            .fetch_one(&self.pool)
            .await?;

        Rental::try_from(row)
    }

    async fn update(&self, rental: &Rental) -> Result<Option<Rental>, RepositoryError> {
        let sql = format!(
            r#"
            WITH a AS (
                UPDATE alugueis
                SET pessoa_id = $2,
                    veiculo_id = $3,
                    data_inicio = $4,
                    data_fim = $5,
                    valor_total = $6
                WHERE id = $1
                RETURNING *
            )
            SELECT {SELECT_COLUMNS} FROM a {JOINS}
            "#
        );
        let period = rental.period();
        let row = sqlx::query_as::<_, RentalRow>(&sql)
            .bind(rental.id().value())
            .bind(rental.renter_id())
            .bind(rental.vehicle_id().value())
            .bind(period.start())
            .bind(period.end())
            .bind(rental.total_price())
            .fetch_optional(&self.pool)
            .await?;

        row.map(Rental::try_from).transpose()
    }

    async fn delete(&self, id: RentalId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM alugueis WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
