//! 地址相关的 GraphQL 根字段

use async_graphql::{Context, Object, Result};
use tracing::info;

use super::model::{Adress, NewAdress};
use crate::app::schema::{storage_result, Repositories};

#[derive(Default)]
pub struct AdressQuery;

#[Object]
impl AdressQuery {
    /// 全部地址
    ///
    /// 存储失败时该字段为 null 并带一条字段级错误，同一查询中的其它字段照常返回。
    async fn all_adresses(&self, ctx: &Context<'_>) -> Result<Option<Vec<Adress>>> {
        let repos = ctx.data::<Repositories>()?;
        storage_result(ctx, "allAdresses", repos.adresses.all().await)
            .await
            .map(Some)
    }
}

#[derive(Default)]
pub struct AdressMutation;

#[Object]
impl AdressMutation {
    async fn create_adress(
        &self,
        ctx: &Context<'_>,
        street: String,
        postcode: String,
        city: String,
    ) -> Result<Option<Adress>> {
        let repos = ctx.data::<Repositories>()?;
        let new_adress = NewAdress {
            street,
            postcode,
            city,
        };
        let id =
            storage_result(ctx, "createAdress", repos.adresses.create(new_adress).await).await?;
        info!(id, "adress created");

        storage_result(ctx, "createAdress", repos.adresses.find(id).await).await
    }
}
