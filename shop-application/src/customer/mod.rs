//! 客户用例：创建、查询、列表、更新
//!
mod create;
mod dto;
mod find;
mod list;
mod update;

pub use create::CreateCustomerUseCase;
pub use dto::{
    AddressDto, CreateCustomerInput, CustomerDto, FindCustomerInput, ListCustomersInput,
    ListCustomersOutput, UpdateCustomerInput,
};
pub use find::FindCustomerUseCase;
pub use list::ListCustomersUseCase;
pub use update::UpdateCustomerUseCase;

#[cfg(test)]
pub(crate) mod test_support {
    use super::AddressDto;

    pub fn address(n: u32) -> AddressDto {
        AddressDto {
            street: format!("Street {n}"),
            number: n,
            zip: format!("Zip {n}"),
            city: format!("City {n}"),
        }
    }
}
