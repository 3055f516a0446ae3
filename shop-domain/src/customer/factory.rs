use super::address::Address;
use super::entity::Customer;
use crate::error::DomainResult;
use uuid::Uuid;

/// 客户工厂：生成 UUID v4 标识
pub struct CustomerFactory;

impl CustomerFactory {
    pub fn create(name: impl Into<String>) -> DomainResult<Customer> {
        Customer::new(Uuid::new_v4().to_string(), name)
    }

    pub fn create_with_address(
        name: impl Into<String>,
        address: Address,
    ) -> DomainResult<Customer> {
        let mut customer = Self::create(name)?;
        customer.change_address(address);
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Entity;

    #[test]
    fn create_assigns_fresh_id() {
        let a = CustomerFactory::create("John").unwrap();
        let b = CustomerFactory::create("John").unwrap();

        assert!(Uuid::parse_str(a.id()).is_ok());
        assert_ne!(a.id(), b.id());
        assert_eq!(a.name(), "John");
        assert!(a.address().is_none());
    }

    #[test]
    fn create_with_address_sets_address() {
        let address = Address::new("Street", 1, "13330-250", "São Paulo").unwrap();
        let customer = CustomerFactory::create_with_address("John", address.clone()).unwrap();

        assert_eq!(customer.address(), Some(&address));
        assert!(!customer.is_active());
    }
}
