use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use crate::types::{self, Shape};

/// Where a generated accessor finds its value.
pub(crate) enum Source {
    /// Field of the owner, downcast to `Self`.
    Instance(TokenStream),
    /// Associated constant; the owner isn't needed.
    Constant(TokenStream),
}

/// `objscope::FieldInfo` expression for one field or associated const.
pub(crate) fn field_info(name: &str, ty: &Type, bits: u32, debug: bool, source: Source) -> TokenStream {
    let (param, binding, place) = match source {
        Source::Instance(member) => (
            quote!(owner),
            quote!(let this = ::objscope::downcast_owner::<Self>(owner)?;),
            quote!(this.#member),
        ),
        Source::Constant(path) => (quote!(_), quote!(), path),
    };
    let type_name = types::type_name(ty);

    let (kind, value) = match types::classify(ty) {
        Shape::Scalar => {
            let text = types::text(quote!(&#place), ty, debug);
            (
                quote!(::objscope::FieldKind::Scalar),
                quote!(::objscope::FieldValue::Scalar(#text)),
            )
        }
        Shape::Array { element, optional } => {
            let element_name = types::type_name(element);
            let element_text = types::text(quote!(element), element, debug);
            let collect = |items: TokenStream| {
                quote! {
                    ::objscope::FieldValue::Array(
                        #items.iter().map(|element| #element_text).collect()
                    )
                }
            };
            let value = if optional {
                let array = collect(quote!(items));
                quote! {
                    match &#place {
                        ::core::option::Option::Some(items) => #array,
                        ::core::option::Option::None => ::objscope::FieldValue::Null,
                    }
                }
            } else {
                collect(place)
            };
            (
                quote!(::objscope::FieldKind::Array { element: #element_name }),
                value,
            )
        }
        Shape::Reference => {
            let value = match types::option_inner(ty) {
                Some(inner) => {
                    let text = types::text(quote!(value), inner, debug);
                    quote! {
                        match &#place {
                            ::core::option::Option::Some(value) => ::objscope::FieldValue::Reference(#text),
                            ::core::option::Option::None => ::objscope::FieldValue::Null,
                        }
                    }
                }
                None => {
                    let text = types::text(quote!(&#place), ty, debug);
                    quote!(::objscope::FieldValue::Reference(#text))
                }
            };
            (quote!(::objscope::FieldKind::Reference), value)
        }
    };

    quote! {
        ::objscope::FieldInfo::new(
            #name,
            #type_name,
            #kind,
            ::objscope::Modifiers::from_bits(#bits),
            |#param| {
                #binding
                ::core::result::Result::Ok(#value)
            },
        )
    }
}
