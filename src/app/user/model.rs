//! 用户数据模型

use async_graphql::{ComplexObject, SimpleObject, ID};

/// 用户
///
/// 行在存储边界上直接解码为该结构，列缺失或类型不符都是存储错误。
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject, sqlx::FromRow)]
#[graphql(complex)]
pub struct User {
    #[graphql(skip)]
    pub id: i64,
    pub fname: String,
    pub lname: String,
    pub description: Option<String>,
}

#[ComplexObject]
impl User {
    /// 存储层生成的标识，创建后不再变化
    async fn id(&self) -> ID {
        ID(self.id.to_string())
    }
}

/// 创建用户所需字段
#[derive(Debug, Clone)]
pub struct NewUser {
    pub fname: String,
    pub lname: String,
    pub description: Option<String>,
}
