//! 地址数据模型

use async_graphql::{ComplexObject, SimpleObject, ID};

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject, sqlx::FromRow)]
#[graphql(complex)]
pub struct Adress {
    #[graphql(skip)]
    pub id: i64,
    pub street: String,
    /// 邮编按文本保存，保留前导零
    pub postcode: String,
    pub city: String,
}

#[ComplexObject]
impl Adress {
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct NewAdress {
    pub street: String,
    pub postcode: String,
    pub city: String,
}
