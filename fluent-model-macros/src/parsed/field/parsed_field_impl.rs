#[allow(unused_imports)]
use super::*;

impl ParsedField {
    pub(crate) fn from_field(field: &Field) -> Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| Error::new(field.span(), "FluentModel requires named fields"))?;
        let name = ident.unraw().to_string();

        let ty = classify_type(&field.ty);
        let mut validations = Vec::new();
        let mut normalize = None;
        let mut nested = false;
        let mut setter = SetterMode::Generated;

        for attr in &field.attrs {
            if attr.path().is_ident("fluent") {
                Self::parse_field_attr(attr, &ty, &mut validations, &mut normalize, &mut nested, &mut setter, &name)?;
            }
        }

        Ok(Self {
            ident,
            name,
            ty,
            validations,
            normalize,
            nested,
            setter,
        })
    }

    fn parse_field_attr(
        attr: &Attribute,
        ty: &TypeInfo,
        validations: &mut Vec<FieldValidation>,
        normalize: &mut Option<Path>,
        nested: &mut bool,
        setter: &mut SetterMode,
        field_name: &str,
    ) -> Result<()> {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("validate") {
                meta.parse_nested_meta(|rule| parse_validation_rule(rule, ty, validations, field_name))?;
            } else if meta.path.is_ident("normalize") {
                if normalize.is_some() {
                    return Err(meta.error("field already has a #[fluent(normalize = ...)] function"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                let path: Path = lit
                    .parse()
                    .map_err(|err| Error::new(lit.span(), format!("invalid normalize path: {}", err)))?;
                *normalize = Some(path);
            } else if meta.path.is_ident("nested") {
                *nested = true;
            } else if meta.path.is_ident("custom") {
                if *setter == SetterMode::Skipped {
                    return Err(meta.error("#[fluent(custom)] cannot be combined with #[fluent(skip)]"));
                }
                *setter = SetterMode::Custom;
            } else if meta.path.is_ident("skip") {
                if *setter == SetterMode::Custom {
                    return Err(meta.error("#[fluent(skip)] cannot be combined with #[fluent(custom)]"));
                }
                *setter = SetterMode::Skipped;
            } else {
                let attr_name = meta.path.to_token_stream().to_string();
                return Err(meta.error(format!("unknown fluent attribute `{}` on `{}`", attr_name, field_name)));
            }
            Ok(())
        })
    }

    pub(crate) fn set_ident(&self) -> Ident {
        format_ident!("set_{}", self.name)
    }

    pub(crate) fn with_ident(&self) -> Ident {
        format_ident!("with_{}", self.name)
    }

    pub(crate) fn has_fluent_setter(&self) -> bool {
        self.setter != SetterMode::Skipped
    }

    pub(crate) fn to_descriptor_tokens(&self) -> TokenStream2 {
        let name = &self.name;
        let type_name: String = self.ty.ty.to_token_stream().to_string().split_whitespace().collect();
        let optional = self.ty.optional;
        let nested = self.nested;
        let validations = self.validations.iter().map(|validation| validation.to_descriptor_tokens());
        let setter = match self.setter {
            SetterMode::Generated => quote! { ::fluent_model::types::SetterMode::Generated },
            SetterMode::Custom => quote! { ::fluent_model::types::SetterMode::Custom },
            SetterMode::Skipped => quote! { ::fluent_model::types::SetterMode::Skipped },
        };
        quote! {
            ::fluent_model::types::FieldDescriptor {
                name: #name.to_string(),
                type_name: #type_name.to_string(),
                optional: #optional,
                nested: #nested,
                validations: vec![#(#validations),*],
                setter: #setter,
            }
        }
    }

    /// Checks against `value: &FieldType`, pushing into `issues`.
    pub(crate) fn check_snippet(&self) -> Option<TokenStream2> {
        let mut checks: Vec<TokenStream2> = self
            .validations
            .iter()
            .map(|validation| validation.emit_check(self))
            .collect();
        if self.nested {
            checks.push(self.nested_check());
        }
        if checks.is_empty() {
            return None;
        }
        if self.ty.optional {
            Some(quote! {
                if let Some(value) = value.as_ref() {
                    #(#checks)*
                }
            })
        } else {
            Some(quote! { #(#checks)* })
        }
    }

    fn nested_check(&self) -> TokenStream2 {
        let field_name = &self.name;
        if matches!(self.ty.base, FieldBase::Vec) {
            quote! {
                for (index, item) in value.iter().enumerate() {
                    if let Err(err) = ::fluent_model::Model::validate(item) {
                        let prefix = format!("{}[{}]", #field_name, index);
                        issues.extend(err.prefixed(&prefix).issues);
                    }
                }
            }
        } else {
            quote! {
                if let Err(err) = ::fluent_model::Model::validate(value) {
                    issues.extend(err.prefixed(#field_name).issues);
                }
            }
        }
    }

    /// Rebinds an owned, already-checked `value` to its stored form.
    pub(crate) fn finish_snippet(&self) -> Option<TokenStream2> {
        let nested = self.nested.then(|| {
            match (self.ty.optional, matches!(self.ty.base, FieldBase::Vec)) {
                (false, false) => quote! { let value = ::fluent_model::Model::validated(value)?; },
                (true, false) => quote! { let value = value.map(::fluent_model::Model::validated).transpose()?; },
                (false, true) => quote! {
                    let value = value
                        .into_iter()
                        .map(::fluent_model::Model::validated)
                        .collect::<::fluent_model::ValidationResult<::std::vec::Vec<_>>>()?;
                },
                (true, true) => quote! {
                    let value = value
                        .map(|items| {
                            items
                                .into_iter()
                                .map(::fluent_model::Model::validated)
                                .collect::<::fluent_model::ValidationResult<::std::vec::Vec<_>>>()
                        })
                        .transpose()?;
                },
            }
        });
        let normalize = self.normalize.as_ref().map(|path| {
            if self.ty.optional {
                quote! { let value = value.map(#path); }
            } else {
                quote! { let value = #path(value); }
            }
        });
        if nested.is_none() && normalize.is_none() {
            return None;
        }
        Some(quote! {
            #nested
            #normalize
        })
    }

    pub(crate) fn set_method(&self) -> TokenStream2 {
        let ident = &self.ident;
        let set_ident = self.set_ident();
        let ty = &self.ty.ty;
        let doc = format!(
            "Validates `value` and assigns it to `{}`. On error the field keeps its previous value.",
            self.name
        );
        let check = self.check_snippet().map(|checks| {
            quote! {
                {
                    let mut issues: ::std::vec::Vec<::fluent_model::ValidationIssue> = ::std::vec::Vec::new();
                    {
                        let value = &value;
                        #checks
                    }
                    if !issues.is_empty() {
                        return ::std::result::Result::Err(::fluent_model::ValidationError::new(issues));
                    }
                }
            }
        });
        let finish = self.finish_snippet();
        // Normalized values must still satisfy the field's own rules.
        let recheck = self.normalize.as_ref().and(check.as_ref());
        quote! {
            #[doc = #doc]
            pub fn #set_ident(&mut self, value: #ty) -> ::fluent_model::ValidationResult<()> {
                #check
                #finish
                #recheck
                self.#ident = value;
                ::std::result::Result::Ok(())
            }
        }
    }

    pub(crate) fn with_method(&self) -> Option<TokenStream2> {
        if self.setter != SetterMode::Generated {
            return None;
        }
        let set_ident = self.set_ident();
        let with_ident = self.with_ident();
        let ty = &self.ty.ty;
        let doc = format!("Sets `{}` and returns `self` for chaining.", self.name);
        let tokens = if !self.ty.optional && matches!(self.ty.base, FieldBase::String) {
            quote! {
                #[doc = #doc]
                pub fn #with_ident<S>(&mut self, value: S) -> ::fluent_model::ValidationResult<&mut Self>
                where
                    S: ::std::convert::Into<::std::string::String>,
                {
                    self.#set_ident(value.into())?;
                    ::std::result::Result::Ok(self)
                }
            }
        } else {
            quote! {
                #[doc = #doc]
                pub fn #with_ident(&mut self, value: #ty) -> ::fluent_model::ValidationResult<&mut Self> {
                    self.#set_ident(value)?;
                    ::std::result::Result::Ok(self)
                }
            }
        };
        Some(tokens)
    }

    pub(crate) fn set_value_arm(&self) -> TokenStream2 {
        let name = &self.name;
        let ty = &self.ty.ty;
        let set_ident = self.set_ident();
        quote! {
            #name => {
                let value: #ty = ::fluent_model::serde_json::from_value(value).map_err(|source| {
                    ::fluent_model::ModelError::InvalidValue { field: #name.to_string(), source }
                })?;
                self.#set_ident(value)?;
                ::std::result::Result::Ok(())
            }
        }
    }

    pub(crate) fn get_value_arm(&self) -> TokenStream2 {
        let name = &self.name;
        let ident = &self.ident;
        quote! {
            #name => ::fluent_model::serde_json::to_value(&self.#ident).map_err(::fluent_model::ModelError::from),
        }
    }

    pub(crate) fn apply_fluent_arm(&self) -> Option<TokenStream2> {
        if !self.has_fluent_setter() {
            return None;
        }
        let name = &self.name;
        let method = format!("with_{}", self.name);
        let ty = &self.ty.ty;
        let with_ident = self.with_ident();
        Some(quote! {
            #method => {
                let value: #ty = ::fluent_model::serde_json::from_value(value).map_err(|source| {
                    ::fluent_model::ModelError::InvalidValue { field: #name.to_string(), source }
                })?;
                self.#with_ident(value)?;
                ::std::result::Result::Ok(self)
            }
        })
    }
}
