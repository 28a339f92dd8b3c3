//! 地址实体：模型、存储端口与 GraphQL 解析器

pub mod model;
pub mod repository;
pub mod resolver;

pub use model::{Adress, NewAdress};
pub use repository::{AdressRepository, PgAdressRepository};
pub use resolver::{AdressMutation, AdressQuery};
