//! 测试用的内存存储实现

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::adress::{Adress, AdressRepository, NewAdress};
use super::schema::Repositories;
use super::user::{NewUser, User, UserRepository};
use crate::core::error::StorageError;

#[derive(Default)]
pub struct MemoryUserRepository {
    rows: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find(&self, id: i64) -> Result<Option<User>, StorageError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<User>, StorageError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, new_user: NewUser) -> Result<i64, StorageError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(User {
            id,
            fname: new_user.fname,
            lname: new_user.lname,
            description: new_user.description,
        });
        Ok(id)
    }
}

#[derive(Default)]
pub struct MemoryAdressRepository {
    rows: Mutex<Vec<Adress>>,
}

#[async_trait]
impl AdressRepository for MemoryAdressRepository {
    async fn find(&self, id: i64) -> Result<Option<Adress>, StorageError> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn all(&self) -> Result<Vec<Adress>, StorageError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn create(&self, new_adress: NewAdress) -> Result<i64, StorageError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(Adress {
            id,
            street: new_adress.street,
            postcode: new_adress.postcode,
            city: new_adress.city,
        });
        Ok(id)
    }
}

/// 每次调用都失败，模拟表不存在或连接中断
pub struct FailingUserRepository;

#[async_trait]
impl UserRepository for FailingUserRepository {
    async fn find(&self, _id: i64) -> Result<Option<User>, StorageError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn all(&self) -> Result<Vec<User>, StorageError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _new_user: NewUser) -> Result<i64, StorageError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub struct FailingAdressRepository;

#[async_trait]
impl AdressRepository for FailingAdressRepository {
    async fn find(&self, _id: i64) -> Result<Option<Adress>, StorageError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn all(&self) -> Result<Vec<Adress>, StorageError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }

    async fn create(&self, _new_adress: NewAdress) -> Result<i64, StorageError> {
        Err(sqlx::Error::PoolTimedOut.into())
    }
}

pub fn memory_repositories() -> Repositories {
    Repositories::new(
        Arc::new(MemoryUserRepository::default()),
        Arc::new(MemoryAdressRepository::default()),
    )
}
