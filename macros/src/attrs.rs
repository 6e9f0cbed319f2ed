use syn::{Attribute, Token, Type, punctuated::Punctuated};

/// Options of a single field, fn or associated const.
///
/// `#[inspect(skip)]` leaves the item out of the report, `#[inspect(debug)]`
/// renders its value with `Debug` instead of `Display`. `#[throws(A, B)]`
/// declares failures of a fn beyond the error type of its `Result`.
#[derive(Default)]
pub(crate) struct ItemOpts {
    pub skip: bool,
    pub debug: bool,
    pub throws: Vec<Type>,
}

impl ItemOpts {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut opts = Self::default();
        for attr in attrs {
            if attr.path().is_ident("inspect") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("skip") {
                        opts.skip = true;
                    } else if meta.path.is_ident("debug") {
                        opts.debug = true;
                    } else {
                        return Err(meta.error("expected `skip` or `debug`"));
                    }
                    Ok(())
                })?;
            } else if attr.path().is_ident("throws") {
                let types =
                    attr.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
                opts.throws.extend(types);
            }
        }
        Ok(opts)
    }

    /// Parse the options and remove their attributes, which the compiler
    /// would otherwise reject on items inside an `impl` block.
    pub fn take(attrs: &mut Vec<Attribute>) -> syn::Result<Self> {
        let opts = Self::parse(attrs)?;
        attrs.retain(|attr| !attr.path().is_ident("inspect") && !attr.path().is_ident("throws"));
        Ok(opts)
    }
}
