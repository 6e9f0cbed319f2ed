use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Member, Path, Type, ext::IdentExt, parse_quote};

use crate::attrs::ItemOpts;
use crate::field::{Source, field_info};
use crate::types;

/// Options of the struct itself, from `#[inspect(...)]`.
#[derive(Default)]
struct ContainerOpts {
    extends: Option<Type>,
    implements: Vec<Path>,
    members: bool,
    hash: Option<Path>,
}

impl ContainerOpts {
    fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut opts = Self::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("inspect")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("extends") {
                    opts.extends = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("implements") {
                    meta.parse_nested_meta(|inner| {
                        opts.implements.push(inner.path);
                        Ok(())
                    })?;
                } else if meta.path.is_ident("members") {
                    opts.members = true;
                } else if meta.path.is_ident("hash") {
                    opts.hash = Some(meta.value()?.parse()?);
                } else {
                    return Err(meta.error(
                        "expected `extends = Type`, `implements(..)`, `members` or `hash = path`",
                    ));
                }
                Ok(())
            })?;
        }
        Ok(opts)
    }
}

pub(crate) fn derive(input: DeriveInput) -> syn::Result<TokenStream> {
    let opts = ContainerOpts::parse(&input.attrs)?;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new(
            input.ident.span(),
            "Inspect can only be derived for structs",
        ));
    };

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut fields = Vec::new();
    let mut params = Vec::new();
    for (index, field) in data.fields.iter().enumerate() {
        let field_opts = ItemOpts::parse(&field.attrs)?;
        if field_opts.skip {
            continue;
        }
        let (member, name) = match &field.ident {
            Some(field_ident) => (
                Member::Named(field_ident.clone()),
                field_ident.unraw().to_string(),
            ),
            None => (Member::Unnamed(index.into()), index.to_string()),
        };
        let type_name = types::type_name(&field.ty);
        params.push(quote!(.param(#name, #type_name)));
        fields.push(field_info(
            &name,
            &field.ty,
            types::visibility_bits(&field.vis),
            field_opts.debug,
            Source::Instance(quote!(#member)),
        ));
    }

    let constructor_name = ident.unraw().to_string();
    let constructor_bits = types::visibility_bits(&input.vis);
    let implicit_constructor = quote! {
        ::objscope::MemberInfo::constructor(
            #constructor_name,
            ::objscope::Modifiers::from_bits(#constructor_bits),
        )
        #(#params)*
    };

    let extends = opts
        .extends
        .as_ref()
        .map(|ty| quote!(.extends(::core::any::type_name::<#ty>())));
    let interfaces = opts.implements.iter().map(types::path_name);

    let hash_code = opts.hash.as_ref().map(|path| {
        quote! {
            fn hash_code(&self) -> u64 {
                #path(self)
            }
        }
    });

    let members_impl = (!opts.members).then(|| {
        quote! {
            impl #impl_generics ::objscope::Members for #ident #ty_generics #where_clause {}
        }
    });

    // Generic types may implement the listed traits conditionally, so only
    // concrete types get the compile-time check.
    let assertion = (input.generics.params.is_empty() && !opts.implements.is_empty()).then(|| {
        let traits = &opts.implements;
        quote! {
            const _: () = {
                fn assert_implements<T: ?::core::marker::Sized #(+ #traits)*>() {}
                let _ = assert_implements::<#ident>;
            };
        }
    });

    Ok(quote! {
        impl #impl_generics ::objscope::Inspect for #ident #ty_generics #where_clause {
            fn type_info(&self) -> ::objscope::TypeInfo {
                ::objscope::TypeInfo::new(::core::any::type_name::<Self>())
                    #extends
                    .implements(&[#(#interfaces),*])
                    .with_fields(::std::vec![#(#fields),*])
                    .with_members::<Self>()
                    .with_implicit_constructor(#implicit_constructor)
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }

            #hash_code
        }

        #members_impl
        #assertion
    })
}
