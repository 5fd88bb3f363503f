use super::*;

pub(crate) fn expand(attr: TokenStream2, item: TokenStream2) -> Result<TokenStream2> {
    if attr.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "fluent_setter requires a field name, e.g. #[fluent_setter(text)]",
        ));
    }
    let field = syn::parse2::<Ident>(attr)
        .map_err(|_| Error::new(Span::call_site(), "fluent_setter expects a single field identifier"))?;
    let method: ImplItemFn = syn::parse2(item)?;

    if let Some(asyncness) = &method.sig.asyncness {
        return Err(Error::new(asyncness.span(), "fluent_setter cannot be applied to async methods"));
    }

    let mut inputs = method.sig.inputs.iter();
    match inputs.next() {
        Some(FnArg::Receiver(receiver)) if receiver.reference.is_some() && receiver.mutability.is_some() => {}
        Some(other) => {
            return Err(Error::new(other.span(), "fluent_setter requires a `&mut self` receiver"));
        }
        None => {
            return Err(Error::new(
                method.sig.ident.span(),
                "fluent_setter requires a `&mut self` receiver",
            ));
        }
    }
    let value_ident = match (inputs.next(), inputs.next()) {
        (Some(FnArg::Typed(arg)), None) => match &*arg.pat {
            Pat::Ident(pat) => pat.ident.clone(),
            other => {
                return Err(Error::new(
                    other.span(),
                    "fluent_setter value argument must be a plain identifier",
                ));
            }
        },
        _ => {
            return Err(Error::new(
                method.sig.ident.span(),
                "fluent_setter methods take `&mut self` and exactly one value argument",
            ));
        }
    };

    let set_ident = format_ident!("set_{}", field.unraw());
    let attrs = &method.attrs;
    let vis = &method.vis;
    let mut sig = method.sig.clone();
    sig.output = parse_quote! { -> ::fluent_model::ValidationResult<&mut Self> };

    Ok(quote! {
        #(#attrs)*
        #vis #sig {
            self.#set_ident(::std::convert::Into::into(#value_ident))?;
            ::std::result::Result::Ok(self)
        }
    })
}
