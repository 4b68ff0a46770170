pub mod ddb_customer_repository;
pub mod mem_customer_repository;

use crate::core::repository::Repository;
use crate::customers::domain::model::CustomerEntity;

pub trait CustomerRepository: Repository<CustomerEntity, str> {}
