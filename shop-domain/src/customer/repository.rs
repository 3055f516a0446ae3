use super::entity::Customer;
use crate::repository::Repository;

/// 客户仓储；`find` 未命中时返回 `NotFound("Customer not found")`
pub trait CustomerRepository: Repository<Customer> {}
