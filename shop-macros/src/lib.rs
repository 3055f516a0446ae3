//! 领域建模辅助宏
//!
//! - `#[value_object]`：为值对象合并常用派生；
//! - `#[domain_event]`：为事件结构体补齐 `occurred_at` 字段并实现 `DomainEvent`。
//!
use proc_macro::TokenStream;

mod domain_event;
mod utils;
mod value_object;

/// 值对象宏
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Debug（可关闭）, Default, Clone, Serialize, Deserialize, PartialEq, Eq（可关闭）
/// - 参数：`#[value_object(debug = false, eq = false)]`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 领域事件宏
///
/// 仅支持形如：
/// ```ignore
/// #[domain_event(name = "ProductCreatedEvent")]
/// pub struct ProductCreatedEvent {
///     event_data: ProductCreatedData,
/// }
/// ```
/// 的具名字段结构体：
/// - 若缺失则在最前追加 `occurred_at: DateTime<Utc>` 字段；
/// - 合并派生：Debug, Clone, PartialEq, Serialize；
/// - 生成 `new(event_data)` 构造函数与 `::shop_domain::domain_event::DomainEvent` 实现；
/// - `name` 缺省时使用结构体名。
#[proc_macro_attribute]
pub fn domain_event(attr: TokenStream, item: TokenStream) -> TokenStream {
    domain_event::expand(attr, item)
}
