use crate::utils::apply_derives;
use proc_macro::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Item, Result, Token, parse::Parse, parse::ParseStream, parse_macro_input};

/// #[value_object] 宏实现
/// - 支持结构体（具名或 tuple）与枚举
/// - 合并/追加派生：Default, Clone, Serialize, Deserialize, PartialEq，以及可控的 Debug、Eq
/// - 参数：`#[value_object(debug = true|false, eq = true|false)]`，默认均为 true
pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> TokenStream {
    let cfg = parse_macro_input!(attr as ValueObjectAttrConfig);
    let mut input = parse_macro_input!(item as Item);

    let mut required: Vec<syn::Path> = vec![
        syn::parse_quote!(Default),
        syn::parse_quote!(Clone),
        syn::parse_quote!(serde::Serialize),
        syn::parse_quote!(serde::Deserialize),
        syn::parse_quote!(PartialEq),
    ];

    // 含浮点字段的值对象无法实现 Eq
    if cfg.derive_eq.unwrap_or(true) {
        required.push(syn::parse_quote!(Eq));
    }

    if cfg.derive_debug.unwrap_or(true) {
        required.insert(0, syn::parse_quote!(Debug));
    }

    match &mut input {
        Item::Struct(st) => {
            apply_derives(&mut st.attrs, required);
            TokenStream::from(quote! { #st })
        }
        Item::Enum(en) => {
            apply_derives(&mut en.attrs, required);
            TokenStream::from(quote! { #en })
        }
        other => syn::Error::new(other.span(), "#[value_object] only supports struct or enum")
            .to_compile_error()
            .into(),
    }
}

// -------- parsing --------

struct ValueObjectAttrConfig {
    derive_debug: Option<bool>,
    derive_eq: Option<bool>,
}

impl Parse for ValueObjectAttrConfig {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut cfg = Self {
            derive_debug: None,
            derive_eq: None,
        };

        if input.is_empty() {
            return Ok(cfg);
        }

        let pairs: Punctuated<ValueObjectAttrElem, Token![,]> =
            Punctuated::parse_terminated(input)?;

        for elem in pairs {
            let (slot, key) = match elem.key {
                ValueObjectKey::Debug => (&mut cfg.derive_debug, "debug"),
                ValueObjectKey::Eq => (&mut cfg.derive_eq, "eq"),
            };
            if slot.is_some() {
                return Err(syn::Error::new(
                    elem.span,
                    format!("duplicate key '{key}' in attribute"),
                ));
            }
            *slot = Some(elem.value);
        }

        Ok(cfg)
    }
}

enum ValueObjectKey {
    Debug,
    Eq,
}

struct ValueObjectAttrElem {
    key: ValueObjectKey,
    value: bool,
    span: proc_macro2::Span,
}

impl Parse for ValueObjectAttrElem {
    fn parse(input: ParseStream) -> Result<Self> {
        let ident: syn::Ident = input.parse()?;
        let key = if ident == "debug" {
            ValueObjectKey::Debug
        } else if ident == "eq" {
            ValueObjectKey::Eq
        } else {
            return Err(syn::Error::new(
                ident.span(),
                "unknown key in attribute; expected 'debug' | 'eq'",
            ));
        };

        let _eq: Token![=] = input.parse()?;
        let expr: syn::Expr = input.parse()?;
        match expr {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Bool(b),
                ..
            }) => Ok(Self {
                key,
                value: b.value(),
                span: ident.span(),
            }),
            other => Err(syn::Error::new(
                other.span(),
                format!("expected boolean literal for '{ident}'"),
            )),
        }
    }
}
