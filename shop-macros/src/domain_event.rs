use crate::utils::{apply_derives, find_field, prepend_missing_field};
use proc_macro::TokenStream;
use quote::quote;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, Type, parse::Parse, parse::ParseStream, parse_macro_input};

const OCCURRED_AT: &str = "occurred_at";
const EVENT_DATA: &str = "event_data";

/// #[domain_event] 宏实现
/// - 仅支持无泛型的具名字段结构体
/// - 字段只能是 `occurred_at` 与 `event_data`，缺失的 `occurred_at` 自动补齐
/// - 生成 `new` / `with_occurred_at` 构造函数与 `DomainEvent` 实现
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as EventAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let st = match &mut input {
        Item::Struct(s) => s,
        other => {
            return syn::Error::new(
                other.span(),
                "#[domain_event] can only be used on struct types",
            )
            .to_compile_error()
            .into();
        }
    };

    if !st.generics.params.is_empty() {
        return syn::Error::new(st.generics.span(), "#[domain_event] does not support generics")
            .to_compile_error()
            .into();
    }

    let fields_named = match &mut st.fields {
        syn::Fields::Named(f) => f,
        _ => {
            return syn::Error::new(st.span(), "#[domain_event] supports only named-field struct")
                .to_compile_error()
                .into();
        }
    };

    let data_ty: Type = match find_field(fields_named, EVENT_DATA) {
        Some(f) => f.ty.clone(),
        None => {
            return syn::Error::new(
                fields_named.span(),
                "#[domain_event] requires an `event_data` field",
            )
            .to_compile_error()
            .into();
        }
    };

    if let Some(extra) = fields_named.named.iter().find(|f| {
        f.ident
            .as_ref()
            .is_some_and(|i| i != OCCURRED_AT && i != EVENT_DATA)
    }) {
        return syn::Error::new(
            extra.span(),
            "#[domain_event] only allows `occurred_at` and `event_data` fields",
        )
        .to_compile_error()
        .into();
    }

    let occurred_at_ty: Type = syn::parse_quote! { ::chrono::DateTime<::chrono::Utc> };
    prepend_missing_field(fields_named, OCCURRED_AT, &occurred_at_ty);

    let required: Vec<syn::Path> = vec![
        syn::parse_quote!(Debug),
        syn::parse_quote!(Clone),
        syn::parse_quote!(PartialEq),
        syn::parse_quote!(serde::Serialize),
    ];
    apply_derives(&mut st.attrs, required);

    let ident = &st.ident;
    let name = cfg
        .name
        .unwrap_or_else(|| syn::LitStr::new(&ident.to_string(), ident.span()));

    let out = quote! {
        #st

        impl #ident {
            /// 以当前时间作为发生时间创建事件
            pub fn new(event_data: #data_ty) -> Self {
                Self::with_occurred_at(event_data, ::chrono::Utc::now())
            }

            pub fn with_occurred_at(
                event_data: #data_ty,
                occurred_at: ::chrono::DateTime<::chrono::Utc>,
            ) -> Self {
                Self { occurred_at, event_data }
            }
        }

        impl ::shop_domain::domain_event::DomainEvent for #ident {
            const NAME: &'static str = #name;
            type Data = #data_ty;

            fn occurred_at(&self) -> &::chrono::DateTime<::chrono::Utc> {
                &self.occurred_at
            }

            fn event_data(&self) -> &Self::Data {
                &self.event_data
            }
        }
    };

    TokenStream::from(out)
}

// -------- parsing --------

struct EventAttrConfig {
    name: Option<syn::LitStr>,
}

impl Parse for EventAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut name: Option<syn::LitStr> = None;

        if input.is_empty() {
            return Ok(Self { name });
        }

        let pairs = syn::punctuated::Punctuated::<syn::MetaNameValue, Token![,]>::parse_terminated(
            input,
        )?;

        for kv in pairs {
            if !kv.path.is_ident("name") {
                return Err(syn::Error::new(kv.path.span(), "unknown key; expected 'name'"));
            }
            if name.is_some() {
                return Err(syn::Error::new(
                    kv.path.span(),
                    "duplicate key 'name' in attribute",
                ));
            }
            match kv.value {
                syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit),
                    ..
                }) => name = Some(lit),
                other => {
                    return Err(syn::Error::new(
                        other.span(),
                        "expected string literal for 'name'",
                    ));
                }
            }
        }

        Ok(Self { name })
    }
}
