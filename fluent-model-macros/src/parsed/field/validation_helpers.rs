#[allow(unused_imports)]
use super::*;

impl FieldValidation {
    pub(crate) fn to_descriptor_tokens(&self) -> TokenStream2 {
        match self {
            FieldValidation::Length { min, max } => {
                let min_tokens = optional_usize_tokens(*min);
                let max_tokens = optional_usize_tokens(*max);
                quote! { ::fluent_model::types::ValidationRule::Length { min: #min_tokens, max: #max_tokens } }
            }
            FieldValidation::Range { min_repr, max_repr, .. } => {
                let min_tokens = optional_string_tokens(min_repr);
                let max_tokens = optional_string_tokens(max_repr);
                quote! { ::fluent_model::types::ValidationRule::Range { min: #min_tokens, max: #max_tokens } }
            }
            FieldValidation::Regex { pattern } => {
                let lit = LitStr::new(pattern, Span::call_site());
                quote! { ::fluent_model::types::ValidationRule::Regex { pattern: #lit.to_string() } }
            }
            FieldValidation::Custom { path_repr, .. } => {
                let lit = LitStr::new(path_repr, Span::call_site());
                quote! { ::fluent_model::types::ValidationRule::Custom { path: #lit.to_string() } }
            }
        }
    }
}

fn optional_usize_tokens(value: Option<usize>) -> TokenStream2 {
    match value {
        Some(v) => quote! { Some(#v) },
        None => quote! { None },
    }
}

fn optional_string_tokens(value: &Option<String>) -> TokenStream2 {
    match value {
        Some(v) => {
            let lit = LitStr::new(v, Span::call_site());
            quote! { Some(#lit.to_string()) }
        }
        None => quote! { None },
    }
}

pub(super) fn ensure_length_supported(base: FieldBase, span: Span) -> Result<()> {
    match base {
        FieldBase::String | FieldBase::Vec => Ok(()),
        _ => Err(Error::new(span, "length validation requires a String or Vec field")),
    }
}

pub(super) fn ensure_range_supported(base: FieldBase, span: Span) -> Result<()> {
    match base {
        FieldBase::Numeric | FieldBase::Float => Ok(()),
        _ => Err(Error::new(span, "range validation requires a numeric field")),
    }
}

/// Integer literal bounds on float fields become float literals, so `min = 0` works for `f64`.
pub(super) fn range_bound(expr: Expr, base: FieldBase) -> Expr {
    if base != FieldBase::Float {
        return expr;
    }
    match expr {
        Expr::Lit(ExprLit { attrs, lit: Lit::Int(int) }) => {
            let float = LitFloat::new(&format!("{}.0", int.base10_digits()), int.span());
            Expr::Lit(ExprLit {
                attrs,
                lit: Lit::Float(float),
            })
        }
        Expr::Unary(ExprUnary {
            attrs,
            op: UnOp::Neg(neg),
            expr,
        }) => Expr::Unary(ExprUnary {
            attrs,
            op: UnOp::Neg(neg),
            expr: Box::new(range_bound(*expr, base)),
        }),
        other => other,
    }
}

pub(super) fn ensure_string_supported(base: FieldBase, span: Span, validator: &str) -> Result<()> {
    match base {
        FieldBase::String => Ok(()),
        _ => Err(Error::new(span, format!("{} validation requires a String field", validator))),
    }
}

pub(super) fn ensure_valid_regex(pattern: &str, span: Span) -> Result<()> {
    regex::Regex::new(pattern)
        .map(|_| ())
        .map_err(|_| Error::new(span, format!("invalid regex pattern `{}`", pattern)))
}
