use super::address::Address;
use super::entity::Customer;
use crate::entity::Entity;
use serde::Serialize;
use shop_macros::domain_event;

/// 客户事件载荷
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerEventData {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub address: Option<Address>,
}

impl From<&Customer> for CustomerEventData {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            active: customer.is_active(),
            address: customer.address().cloned(),
        }
    }
}

/// 客户已创建
#[domain_event(name = "CustomerCreatedEvent")]
pub struct CustomerCreatedEvent {
    event_data: CustomerEventData,
}

/// 客户地址已变更
#[domain_event(name = "CustomerAddressChanged")]
pub struct CustomerAddressChanged {
    event_data: CustomerEventData,
}
