//! GraphQL schema 定义
//!
//! 根类型由各实体的解析器合并而成；schema 在启动时构建一次，之后只读共享。

use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, MergedObject, Schema};

use super::adress::{AdressMutation, AdressQuery, AdressRepository, PgAdressRepository};
use super::user::{PgUserRepository, UserMutation, UserQuery, UserRepository};
use crate::core::{diagnostics::ErrorReporter, error::StorageError};
use crate::infrastructure::database::DatabaseManager;

#[derive(MergedObject, Default)]
pub struct QueryRoot(UserQuery, AdressQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(UserMutation, AdressMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// 解析器可见的存储端口集合
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub adresses: Arc<dyn AdressRepository>,
}

impl Repositories {
    pub fn new(users: Arc<dyn UserRepository>, adresses: Arc<dyn AdressRepository>) -> Self {
        Self { users, adresses }
    }

    /// 两个端口共用同一个连接池
    pub fn postgres(db: DatabaseManager) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(db.clone())),
            adresses: Arc::new(PgAdressRepository::new(db)),
        }
    }
}

pub fn build_schema(repositories: Repositories, reporter: ErrorReporter) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(repositories)
    .data(reporter)
    .finish()
}

/// 导出 SDL，不需要数据库
pub fn sdl() -> String {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .finish()
    .sdl()
}

/// 把存储结果转换为字段结果，失败时交给 `ErrorReporter` 记录
pub(crate) async fn storage_result<T>(
    ctx: &Context<'_>,
    field: &str,
    result: Result<T, StorageError>,
) -> async_graphql::Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(err) => {
            if let Ok(reporter) = ctx.data::<ErrorReporter>() {
                reporter.record(field, &err).await;
            }
            Err(err.into())
        }
    }
}
