//! 用户相关的 GraphQL 根字段

use async_graphql::{Context, Object, Result, ID};
use tracing::info;

use super::model::{NewUser, User};
use crate::app::schema::{storage_result, Repositories};

#[derive(Default)]
pub struct UserQuery;

#[Object]
impl UserQuery {
    /// 按 id 查询单个用户，不存在时返回 null
    async fn user(&self, ctx: &Context<'_>, id: ID) -> Result<Option<User>> {
        // 非数字 id 不可能命中任何行
        let Ok(id) = id.parse::<i64>() else {
            return Ok(None);
        };
        let repos = ctx.data::<Repositories>()?;
        storage_result(ctx, "user", repos.users.find(id).await).await
    }

    /// 全部用户，顺序不做保证
    async fn all_users(&self, ctx: &Context<'_>) -> Result<Option<Vec<User>>> {
        let repos = ctx.data::<Repositories>()?;
        storage_result(ctx, "allUsers", repos.users.all().await)
            .await
            .map(Some)
    }
}

#[derive(Default)]
pub struct UserMutation;

#[Object]
impl UserMutation {
    /// 创建用户并返回新记录
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        fname: String,
        lname: String,
        description: Option<String>,
    ) -> Result<Option<User>> {
        let repos = ctx.data::<Repositories>()?;
        let new_user = NewUser {
            fname,
            lname,
            description,
        };
        let id = storage_result(ctx, "createUser", repos.users.create(new_user).await).await?;
        info!(id, "user created");

        storage_result(ctx, "createUser", repos.users.find(id).await).await
    }
}
