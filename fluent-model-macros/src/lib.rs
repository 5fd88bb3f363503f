use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{ToTokens, format_ident, quote};
use syn::ext::IdentExt;
use syn::meta::ParseNestedMeta;
use syn::{
    Attribute, Data, DeriveInput, Error, Expr, ExprLit, ExprUnary, Field, Fields, FnArg, GenericArgument, Ident,
    ImplItemFn, Lit, LitFloat, LitInt, LitStr, Pat, Path, PathArguments, Result, Type, UnOp, parse_macro_input,
    parse_quote, spanned::Spanned,
};

mod parsed;
mod setter_attr;

use parsed::ParsedModel;

/// Generates validated assignment and fluent setters for every named field.
///
/// For each field `f: T` the derive emits:
/// - `set_f(&mut self, value: T) -> ValidationResult<()>`, which runs the field's
///   validators before assigning, so a rejected value leaves the old one in place;
/// - `with_f(&mut self, value) -> ValidationResult<&mut Self>`, unless the field is
///   marked `#[fluent(custom)]` or `#[fluent(skip)]`;
/// - `Model`, `DynamicModel` and `FluentModel` implementations.
///
/// Field attributes:
///
/// ```text
/// #[fluent(validate(length(min = 1, max = 140)))]
/// #[fluent(validate(range(min = 0, max = 10)))]
/// #[fluent(validate(regex = "^[a-z_]+$"))]
/// #[fluent(validate(custom = "path::to::check"))]
/// #[fluent(normalize = "path::to::fix_up")]
/// #[fluent(nested)]
/// #[fluent(custom)]   // author writes `with_<field>` themselves
/// #[fluent(skip)]     // no fluent setter
/// ```
///
/// Normalized values are checked again, so a normalizer cannot store a value its
/// own field rules reject. Integer range bounds on `f32`/`f64` fields are read as
/// float literals.
#[proc_macro_derive(FluentModel, attributes(fluent))]
pub fn derive_fluent_model(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedModel::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Turns a `(&mut self, value)` method into a chaining setter for `field`.
///
/// The method body and return type are replaced: the value is assigned through the
/// model's validated `set_<field>` and `self` is returned.
///
/// ```text
/// impl Tweet {
///     #[fluent_setter(text)]
///     pub fn body(&mut self, value: String) {}
/// }
/// ```
#[proc_macro_attribute]
pub fn fluent_setter(attr: TokenStream, item: TokenStream) -> TokenStream {
    match setter_attr::expand(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
