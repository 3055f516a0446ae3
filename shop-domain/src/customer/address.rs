use crate::error::{DomainError, DomainResult};
use crate::notification::Notification;
use crate::value_object::ValueObject;
use shop_macros::value_object;
use std::fmt;

const CONTEXT: &str = "address";

/// 客户地址
#[value_object]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl ValueObject for Address {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        let mut notification = Notification::new();
        if self.street.trim().is_empty() {
            notification.add_error(CONTEXT, "Street is required");
        }
        if self.number == 0 {
            notification.add_error(CONTEXT, "Number is required");
        }
        if self.zip.trim().is_empty() {
            notification.add_error(CONTEXT, "Zip is required");
        }
        if self.city.trim().is_empty() {
            notification.add_error(CONTEXT, "City is required");
        }
        notification.into_result()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_displays_in_postal_format() {
        let address = Address::new("Street 1", 1, "12345-000", "City").unwrap();
        assert_eq!(address.to_string(), "Street 1, 1, 12345-000 City");
        assert_eq!(address.number(), 1);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let err = Address::new("", 0, " ", "").unwrap_err();
        assert_eq!(
            err.to_string(),
            "address: Street is required,address: Number is required,address: Zip is required,address: City is required"
        );
    }

    #[test]
    fn equality_is_by_value() {
        let a = Address::new("Street 1", 1, "Zip 1", "City 1").unwrap();
        let b = Address::new("Street 1", 1, "Zip 1", "City 1").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, Address::new("Street 2", 1, "Zip 1", "City 1").unwrap());
    }
}
