//! 商品用例：创建、查询、列表、更新
//!
mod create;
mod dto;
mod find;
mod list;
mod update;

pub use create::CreateProductUseCase;
pub use dto::{
    CreateProductInput, FindProductInput, ListProductsInput, ListProductsOutput, ProductDto,
    UpdateProductInput,
};
pub use find::FindProductUseCase;
pub use list::ListProductsUseCase;
pub use update::UpdateProductUseCase;
