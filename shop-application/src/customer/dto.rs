use crate::dto::Dto;
use bon::Builder;
use serde::{Deserialize, Serialize};
use shop_domain::customer::{Address, Customer};
use shop_domain::entity::Entity;
use shop_domain::error::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        Self {
            street: address.street().to_string(),
            number: address.number(),
            zip: address.zip().to_string(),
            city: address.city().to_string(),
        }
    }
}

impl TryFrom<AddressDto> for Address {
    type Error = DomainError;

    fn try_from(dto: AddressDto) -> Result<Self, Self::Error> {
        Address::new(dto.street, dto.number, dto.zip, dto.city)
    }
}

/// 客户视图（创建/查询/更新的输出）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: String,
    pub name: String,
    pub address: Option<AddressDto>,
}

impl Dto for CustomerDto {}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            address: customer.address().map(AddressDto::from),
        }
    }
}

#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerInput {
    #[builder(into)]
    pub name: String,
    pub address: AddressDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindCustomerInput {
    pub id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCustomersInput {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListCustomersOutput {
    pub customers: Vec<CustomerDto>,
}

impl Dto for ListCustomersOutput {}

#[derive(Builder, Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCustomerInput {
    #[builder(into)]
    pub id: String,
    #[builder(into)]
    pub name: String,
    pub address: AddressDto,
}
