use super::address::Address;
use super::event::{CustomerAddressChanged, CustomerCreatedEvent, CustomerEventData};
use crate::entity::Entity;
use crate::error::{DomainError, DomainResult};
use crate::eventing::EventDispatcher;
use crate::notification::Notification;
use serde::{Deserialize, Serialize};

const CONTEXT: &str = "customer";

/// 客户聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: f64,
}

impl Customer {
    /// 创建客户（未激活、无地址、积分为零）
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> DomainResult<Self> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0.0,
        };
        customer.validate().into_result()?;
        Ok(customer)
    }

    /// 创建客户并通知 `CustomerCreatedEvent`
    pub fn create(
        id: impl Into<String>,
        name: impl Into<String>,
        events: &EventDispatcher,
    ) -> DomainResult<Self> {
        let customer = Self::new(id, name)?;
        events.notify(&CustomerCreatedEvent::new(CustomerEventData::from(&customer)))?;
        Ok(customer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> f64 {
        self.reward_points
    }

    /// 修改名称；校验失败时保持原名称不变
    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        let previous = std::mem::replace(&mut self.name, name.into());
        if let Err(err) = self.validate().into_result() {
            self.name = previous;
            return Err(err);
        }
        Ok(())
    }

    pub fn change_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// 修改地址并通知 `CustomerAddressChanged`
    pub fn relocate(&mut self, address: Address, events: &EventDispatcher) -> DomainResult<()> {
        self.change_address(address);
        events.notify(&CustomerAddressChanged::new(CustomerEventData::from(&*self)))
    }

    pub fn activate(&mut self) -> DomainResult<()> {
        if self.address.is_none() {
            return Err(DomainError::invalid_state(
                "Address is mandatory to activate a customer",
            ));
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    pub fn add_reward_points(&mut self, points: f64) {
        self.reward_points += points;
    }
}

impl Entity for Customer {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn validate(&self) -> Notification {
        let mut notification = Notification::new();
        if self.id.trim().is_empty() {
            notification.add_error(CONTEXT, "Id is required");
        }
        if self.name.trim().is_empty() {
            notification.add_error(CONTEXT, "Name is required");
        }
        notification
    }
}
