//! 用户实体：模型、存储端口与 GraphQL 解析器

pub mod model;
pub mod repository;
pub mod resolver;

pub use model::{NewUser, User};
pub use repository::{PgUserRepository, UserRepository};
pub use resolver::{UserMutation, UserQuery};
