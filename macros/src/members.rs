use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    FnArg, Ident, ImplItem, ItemImpl, Pat, ReturnType, Signature, Type, Visibility, ext::IdentExt,
};

use crate::attrs::ItemOpts;
use crate::field::{Source, field_info};
use crate::types::{self, flags};

pub(crate) fn expand(mut item: ItemImpl) -> syn::Result<TokenStream> {
    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "#[members] expects an inherent impl block",
        ));
    }
    let self_ident = match &*item.self_ty {
        Type::Path(ty) => ty.path.segments.last().map(|segment| segment.ident.clone()),
        _ => None,
    }
    .ok_or_else(|| syn::Error::new_spanned(&item.self_ty, "#[members] expects a named type"))?;

    let mut constructors = Vec::new();
    let mut methods = Vec::new();
    let mut constants = Vec::new();

    for impl_item in &mut item.items {
        match impl_item {
            ImplItem::Fn(function) => {
                let opts = ItemOpts::take(&mut function.attrs)?;
                if opts.skip {
                    continue;
                }
                let (is_constructor, info) =
                    member_info(&function.vis, &function.sig, &self_ident, &opts.throws);
                if is_constructor {
                    constructors.push(info);
                } else {
                    methods.push(info);
                }
            }
            ImplItem::Const(constant) => {
                let opts = ItemOpts::take(&mut constant.attrs)?;
                if opts.skip {
                    continue;
                }
                let const_ident = &constant.ident;
                let bits = types::visibility_bits(&constant.vis) | flags::STATIC | flags::FINAL;
                constants.push(field_info(
                    &const_ident.unraw().to_string(),
                    &constant.ty,
                    bits,
                    opts.debug,
                    Source::Constant(quote!(Self::#const_ident)),
                ));
            }
            _ => {}
        }
    }

    let (impl_generics, _, where_clause) = item.generics.split_for_impl();
    let self_ty = &item.self_ty;

    Ok(quote! {
        #item

        impl #impl_generics ::objscope::Members for #self_ty #where_clause {
            fn constructors() -> ::std::vec::Vec<::objscope::MemberInfo> {
                ::std::vec![#(#constructors),*]
            }

            fn methods() -> ::std::vec::Vec<::objscope::MemberInfo> {
                ::std::vec![#(#methods),*]
            }

            fn constants() -> ::std::vec::Vec<::objscope::FieldInfo> {
                ::std::vec![#(#constants),*]
            }
        }
    })
}

/// `MemberInfo` expression of one fn, and whether it is a constructor.
///
/// A constructor is an associated fn (no receiver) returning `Self`, the
/// type by name, or a `Result` of either. A `Result` return contributes its
/// error type to the declared failures.
fn member_info(
    vis: &Visibility,
    sig: &Signature,
    self_ident: &Ident,
    extra_throws: &[Type],
) -> (bool, TokenStream) {
    let name = sig.ident.unraw().to_string();
    let has_receiver = sig.receiver().is_some();

    let mut bits = types::visibility_bits(vis);
    if !has_receiver {
        bits |= flags::STATIC;
    }
    if sig.constness.is_some() {
        bits |= flags::CONST | flags::FINAL;
    }
    if sig.asyncness.is_some() {
        bits |= flags::ASYNC;
    }
    if sig.unsafety.is_some() {
        bits |= flags::UNSAFE;
    }

    let (returns, mut throws) = match &sig.output {
        ReturnType::Default => (None, Vec::new()),
        ReturnType::Type(_, ty) => match types::result_parts(ty) {
            Some((ok, err)) => (Some(ok), vec![err]),
            None => (Some(&**ty), Vec::new()),
        },
    };
    throws.extend(extra_throws);

    let is_constructor =
        !has_receiver && returns.is_some_and(|ty| types::is_self_type(ty, self_ident));

    let params = sig
        .inputs
        .iter()
        .filter_map(|arg| match arg {
            FnArg::Typed(typed) => Some(typed),
            FnArg::Receiver(_) => None,
        })
        .enumerate()
        .map(|(index, typed)| {
            let param_name = match &*typed.pat {
                Pat::Ident(pat) => pat.ident.unraw().to_string(),
                _ => format!("arg{index}"),
            };
            let type_name = types::type_name(&typed.ty);
            quote!(.param(#param_name, #type_name))
        });
    let throws = throws.into_iter().map(|ty| {
        let type_name = types::type_name(ty);
        quote!(.throws(#type_name))
    });

    let modifiers = quote!(::objscope::Modifiers::from_bits(#bits));
    let head = if is_constructor {
        quote!(::objscope::MemberInfo::constructor(#name, #modifiers))
    } else {
        let return_type = returns.map_or_else(|| "()".to_string(), types::type_name);
        quote!(::objscope::MemberInfo::method(#name, #return_type, #modifiers))
    };

    (is_constructor, quote!(#head #(#params)* #(#throws)*))
}
