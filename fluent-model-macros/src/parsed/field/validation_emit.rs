#[allow(unused_imports)]
use super::*;

impl FieldValidation {
    /// Emits a check against `value: &Inner`, where `Inner` is the field type with any
    /// `Option` already peeled off.
    pub(crate) fn emit_check(&self, field: &ParsedField) -> TokenStream2 {
        let field_name = &field.name;
        match self {
            FieldValidation::Length { min, max } => {
                let len_expr = match field.ty.base {
                    FieldBase::String => quote! { value.chars().count() },
                    _ => quote! { value.len() },
                };
                let min_check = min.map(|value| {
                    quote! {
                        if len < #value {
                            issues.push(::fluent_model::ValidationIssue::new(
                                #field_name,
                                "validation.length",
                                format!("length must be at least {}", #value),
                            ));
                        }
                    }
                });
                let max_check = max.map(|value| {
                    quote! {
                        if len > #value {
                            issues.push(::fluent_model::ValidationIssue::new(
                                #field_name,
                                "validation.length",
                                format!("length must be at most {}", #value),
                            ));
                        }
                    }
                });
                quote! {
                    {
                        let len = #len_expr;
                        #min_check
                        #max_check
                    }
                }
            }
            FieldValidation::Range {
                min,
                min_repr,
                max,
                max_repr,
            } => {
                let min_check = min.as_ref().map(|tokens| {
                    let repr = min_repr.as_deref().unwrap_or("min");
                    quote! {
                        if *value < #tokens {
                            issues.push(::fluent_model::ValidationIssue::new(
                                #field_name,
                                "validation.range",
                                format!("value must be at least {}", #repr),
                            ));
                        }
                    }
                });
                let max_check = max.as_ref().map(|tokens| {
                    let repr = max_repr.as_deref().unwrap_or("max");
                    quote! {
                        if *value > #tokens {
                            issues.push(::fluent_model::ValidationIssue::new(
                                #field_name,
                                "validation.range",
                                format!("value must be at most {}", #repr),
                            ));
                        }
                    }
                });
                quote! {
                    #min_check
                    #max_check
                }
            }
            FieldValidation::Regex { pattern } => {
                let lit = LitStr::new(pattern, Span::call_site());
                quote! {
                    match ::fluent_model::regex::Regex::new(#lit) {
                        Ok(re) if re.is_match(value.as_str()) => {}
                        _ => issues.push(::fluent_model::ValidationIssue::new(
                            #field_name,
                            "validation.regex",
                            format!("value does not match pattern {}", #lit),
                        )),
                    }
                }
            }
            FieldValidation::Custom { path, .. } => {
                quote! {
                    if let Err(err) = #path(value) {
                        for issue in err.issues {
                            issues.push(::fluent_model::ValidationIssue::new(#field_name, issue.code, issue.message));
                        }
                    }
                }
            }
        }
    }
}

pub(super) fn parse_validation_rule(
    rule: ParseNestedMeta,
    ty: &TypeInfo,
    validations: &mut Vec<FieldValidation>,
    field_name: &str,
) -> Result<()> {
    let ident = rule
        .path
        .get_ident()
        .cloned()
        .ok_or_else(|| Error::new(rule.path.span(), format!("unsupported validator on `{}`", field_name)))?;
    let ident_str = ident.to_string();
    match ident_str.as_str() {
        "length" => {
            ensure_length_supported(ty.base, rule.path.span())?;
            let mut min: Option<usize> = None;
            let mut max: Option<usize> = None;
            rule.parse_nested_meta(|item| {
                if item.path.is_ident("min") {
                    let lit: LitInt = item.value()?.parse()?;
                    min = Some(lit.base10_parse()?);
                } else if item.path.is_ident("max") {
                    let lit: LitInt = item.value()?.parse()?;
                    max = Some(lit.base10_parse()?);
                } else {
                    return Err(item.error("length accepts only `min` and `max`"));
                }
                Ok(())
            })?;
            if let (Some(min), Some(max)) = (min, max)
                && min > max
            {
                return Err(Error::new(rule.path.span(), "length `min` is greater than `max`"));
            }
            validations.push(FieldValidation::Length { min, max });
        }
        "range" => {
            ensure_range_supported(ty.base, rule.path.span())?;
            let mut min = None;
            let mut min_repr = None;
            let mut max = None;
            let mut max_repr = None;
            rule.parse_nested_meta(|item| {
                if item.path.is_ident("min") {
                    let expr: Expr = item.value()?.parse()?;
                    min_repr = Some(expr.to_token_stream().to_string());
                    min = Some(range_bound(expr, ty.base).to_token_stream());
                } else if item.path.is_ident("max") {
                    let expr: Expr = item.value()?.parse()?;
                    max_repr = Some(expr.to_token_stream().to_string());
                    max = Some(range_bound(expr, ty.base).to_token_stream());
                } else {
                    return Err(item.error("range accepts only `min` and `max`"));
                }
                Ok(())
            })?;
            validations.push(FieldValidation::Range {
                min,
                min_repr,
                max,
                max_repr,
            });
        }
        "regex" => {
            ensure_string_supported(ty.base, rule.path.span(), "regex")?;
            let pattern: LitStr = rule.value()?.parse()?;
            ensure_valid_regex(&pattern.value(), pattern.span())?;
            validations.push(FieldValidation::Regex {
                pattern: pattern.value(),
            });
        }
        "custom" => {
            let lit: LitStr = rule.value()?.parse()?;
            let path: Path = lit
                .parse()
                .map_err(|err| Error::new(lit.span(), format!("invalid custom validator path: {}", err)))?;
            validations.push(FieldValidation::Custom {
                path: path.to_token_stream(),
                path_repr: lit.value(),
            });
        }
        other => {
            return Err(Error::new(
                rule.path.span(),
                format!("unknown validator `{}` on `{}`", other, field_name),
            ));
        }
    }
    Ok(())
}

pub(super) fn classify_type(ty: &Type) -> TypeInfo {
    if let Some(inner) = unwrap_generic(ty, "Option") {
        let mut info = classify_type(inner);
        info.optional = true;
        info.ty = ty.clone();
        return info;
    }

    let base = if unwrap_generic(ty, "Vec").is_some() {
        FieldBase::Vec
    } else if last_segment_is(ty, &["String"]) {
        FieldBase::String
    } else if last_segment_is(
        ty,
        &[
            "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
        ],
    ) {
        FieldBase::Numeric
    } else if last_segment_is(ty, &["f32", "f64"]) {
        FieldBase::Float
    } else if last_segment_is(ty, &["bool"]) {
        FieldBase::Boolean
    } else {
        FieldBase::Other
    };

    TypeInfo {
        optional: false,
        base,
        ty: ty.clone(),
    }
}

fn last_segment_is(ty: &Type, names: &[&str]) -> bool {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.arguments.is_empty() && names.iter().any(|name| segment.ident == name)),
        _ => false,
    }
}

fn unwrap_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first() {
        Some(GenericArgument::Type(inner)) if args.args.len() == 1 => Some(inner),
        _ => None,
    }
}
