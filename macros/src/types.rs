//! Classification and naming of field, parameter and return types.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{GenericArgument, Ident, PathArguments, Type, TypePath, Visibility};

/// Bit values of `objscope::Modifiers`.
pub(crate) mod flags {
    pub const PUBLIC: u32 = 0x0001;
    pub const PRIVATE: u32 = 0x0002;
    pub const PROTECTED: u32 = 0x0004;
    pub const STATIC: u32 = 0x0008;
    pub const FINAL: u32 = 0x0010;
    pub const ASYNC: u32 = 0x0100;
    pub const UNSAFE: u32 = 0x0200;
    pub const CONST: u32 = 0x0400;
}

const SCALARS: &[&str] = &[
    "bool", "char", "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128",
    "usize", "f32", "f64",
];

pub(crate) enum Shape<'a> {
    Scalar,
    Array { element: &'a Type, optional: bool },
    Reference,
}

pub(crate) fn classify(ty: &Type) -> Shape<'_> {
    if is_scalar(ty) {
        return Shape::Scalar;
    }
    if let Some(element) = array_element(ty) {
        return Shape::Array {
            element,
            optional: false,
        };
    }
    if let Some(element) = option_inner(ty).and_then(array_element) {
        return Shape::Array {
            element,
            optional: true,
        };
    }
    Shape::Reference
}

pub(crate) fn visibility_bits(vis: &Visibility) -> u32 {
    match vis {
        Visibility::Public(_) => flags::PUBLIC,
        Visibility::Restricted(_) => flags::PROTECTED,
        Visibility::Inherited => flags::PRIVATE,
    }
}

/// Source form of a type, without the token spacing `quote` adds.
pub(crate) fn type_name(ty: &Type) -> String {
    tidy(&quote!(#ty).to_string())
}

pub(crate) fn path_name(path: &syn::Path) -> String {
    tidy(&quote!(#path).to_string())
}

fn tidy(raw: &str) -> String {
    const RULES: &[(&str, &str)] = &[
        (" :: ", "::"),
        (":: ", "::"),
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ,", ","),
        (" ;", ";"),
        ("& ", "&"),
        ("( ", "("),
        (" )", ")"),
        ("[ ", "["),
        (" ]", "]"),
    ];
    RULES
        .iter()
        .fold(raw.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Expression converting `expr` (a reference to a `ty`) into a `String`.
///
/// `Option`s are unwrapped, with `None` becoming `null`.
pub(crate) fn text(expr: TokenStream, ty: &Type, debug: bool) -> TokenStream {
    if let Some(inner) = option_inner(ty) {
        let inner_text = text(quote!(value), inner, debug);
        return quote! {
            match #expr {
                ::core::option::Option::Some(value) => #inner_text,
                ::core::option::Option::None => ::std::string::String::from("null"),
            }
        };
    }
    if matches!(strip(ty), Type::Tuple(tuple) if tuple.elems.is_empty()) {
        return quote!({
            let _ = #expr;
            ::std::string::String::from("()")
        });
    }
    if debug {
        quote!(::std::format!("{:?}", #expr))
    } else {
        quote!(::std::string::ToString::to_string(#expr))
    }
}

pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    generic_arg(ty, &["Option"])
}

/// `(T, E)` of a `Result<T, E>`. One-argument aliases like `io::Result<T>`
/// don't name their error and are left alone.
pub(crate) fn result_parts(ty: &Type) -> Option<(&Type, &Type)> {
    let segment = last_segment(ty)?;
    if segment.ident != "Result" {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    });
    match (types.next(), types.next(), types.next()) {
        (Some(ok), Some(err), None) => Some((ok, err)),
        _ => None,
    }
}

/// `Self`, or a path ending in the implementing type's name.
pub(crate) fn is_self_type(ty: &Type, self_ident: &Ident) -> bool {
    last_segment(ty).is_some_and(|segment| segment.ident == "Self" || segment.ident == *self_ident)
}

fn strip(ty: &Type) -> &Type {
    match ty {
        Type::Paren(inner) => strip(&inner.elem),
        Type::Group(inner) => strip(&inner.elem),
        _ => ty,
    }
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match strip(ty) {
        Type::Path(TypePath { qself: None, path }) => path.segments.last(),
        _ => None,
    }
}

fn generic_arg<'a>(ty: &'a Type, names: &[&str]) -> Option<&'a Type> {
    let segment = last_segment(ty)?;
    if !names.iter().any(|name| segment.ident == *name) {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

fn is_scalar(ty: &Type) -> bool {
    match strip(ty) {
        Type::Tuple(tuple) => tuple.elems.is_empty(),
        Type::Path(TypePath { qself: None, path }) => path
            .get_ident()
            .is_some_and(|ident| SCALARS.iter().any(|scalar| ident == scalar)),
        _ => false,
    }
}

fn array_element(ty: &Type) -> Option<&Type> {
    match strip(ty) {
        Type::Array(array) => Some(&*array.elem),
        Type::Slice(slice) => Some(&*slice.elem),
        Type::Reference(reference) => match strip(&reference.elem) {
            Type::Array(array) => Some(&*array.elem),
            Type::Slice(slice) => Some(&*slice.elem),
            _ => None,
        },
        _ => generic_arg(ty, &["Vec", "VecDeque"]).or_else(|| {
            generic_arg(ty, &["Box", "Rc", "Arc"]).and_then(|inner| match strip(inner) {
                Type::Slice(slice) => Some(&*slice.elem),
                _ => None,
            })
        }),
    }
}
