//! 地址存储端口及 PostgreSQL 实现

use async_trait::async_trait;

use super::model::{Adress, NewAdress};
use crate::core::error::StorageError;
use crate::infrastructure::database::DatabaseManager;

const SELECT_ADRESS_BY_ID: &str = "SELECT id, street, postcode, city FROM adress WHERE id = $1";
const SELECT_ALL_ADRESSES: &str = "SELECT id, street, postcode, city FROM adress";
const INSERT_ADRESS: &str =
    "INSERT INTO adress (street, postcode, city) VALUES ($1, $2, $3) RETURNING id";

/// 地址存储端口
#[async_trait]
pub trait AdressRepository: Send + Sync {
    async fn find(&self, id: i64) -> Result<Option<Adress>, StorageError>;
    async fn all(&self) -> Result<Vec<Adress>, StorageError>;
    async fn create(&self, new_adress: NewAdress) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgAdressRepository {
    db: DatabaseManager,
}

impl PgAdressRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AdressRepository for PgAdressRepository {
    async fn find(&self, id: i64) -> Result<Option<Adress>, StorageError> {
        self.db
            .fetch_one(sqlx::query_as::<_, Adress>(SELECT_ADRESS_BY_ID).bind(id))
            .await
    }

    async fn all(&self) -> Result<Vec<Adress>, StorageError> {
        self.db
            .fetch_all(sqlx::query_as::<_, Adress>(SELECT_ALL_ADRESSES))
            .await
    }

    async fn create(&self, new_adress: NewAdress) -> Result<i64, StorageError> {
        self.db
            .execute(
                sqlx::query_scalar::<_, i64>(INSERT_ADRESS)
                    .bind(new_adress.street)
                    .bind(new_adress.postcode)
                    .bind(new_adress.city),
            )
            .await
    }
}
