//! 用户存储端口及 PostgreSQL 实现

use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::core::error::StorageError;
use crate::infrastructure::database::DatabaseManager;

const SELECT_USER_BY_ID: &str = "SELECT id, fname, lname, description FROM users WHERE id = $1";
const SELECT_ALL_USERS: &str = "SELECT id, fname, lname, description FROM users";
const INSERT_USER: &str =
    "INSERT INTO users (fname, lname, description) VALUES ($1, $2, $3) RETURNING id";

/// 用户存储端口
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 按 id 取单个用户
    async fn find(&self, id: i64) -> Result<Option<User>, StorageError>;

    /// 取全部用户，顺序不做保证
    async fn all(&self) -> Result<Vec<User>, StorageError>;

    /// 插入用户并返回生成的 id
    async fn create(&self, new_user: NewUser) -> Result<i64, StorageError>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseManager,
}

impl PgUserRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find(&self, id: i64) -> Result<Option<User>, StorageError> {
        self.db
            .fetch_one(sqlx::query_as::<_, User>(SELECT_USER_BY_ID).bind(id))
            .await
    }

    async fn all(&self) -> Result<Vec<User>, StorageError> {
        self.db
            .fetch_all(sqlx::query_as::<_, User>(SELECT_ALL_USERS))
            .await
    }

    async fn create(&self, new_user: NewUser) -> Result<i64, StorageError> {
        self.db
            .execute(
                sqlx::query_scalar::<_, i64>(INSERT_USER)
                    .bind(new_user.fname)
                    .bind(new_user.lname)
                    .bind(new_user.description),
            )
            .await
    }
}
