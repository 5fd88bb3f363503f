#[allow(unused_imports)]
use super::*;

pub(crate) struct ParsedModel {
    name: Ident,
    fields: Vec<ParsedField>,
}

impl ParsedModel {
    pub(crate) fn from_input(input: &DeriveInput) -> Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(Error::new(
                input.generics.params.span(),
                "FluentModel does not support generic parameters",
            ));
        }

        for attr in &input.attrs {
            if attr.path().is_ident("fluent") {
                return Err(Error::new(
                    attr.path().span(),
                    "#[fluent(...)] belongs on fields, not on the model type",
                ));
            }
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let mut parsed = Vec::new();
                    for field in &named.named {
                        parsed.push(ParsedField::from_field(field)?);
                    }
                    parsed
                }
                Fields::Unit => Vec::new(),
                Fields::Unnamed(unnamed) if unnamed.unnamed.is_empty() => Vec::new(),
                Fields::Unnamed(_) => return Err(Error::new(input.ident.span(), "FluentModel requires named fields")),
            },
            _ => return Err(Error::new(input.ident.span(), "FluentModel can only be derived for structs")),
        };

        Ok(Self {
            name: input.ident.clone(),
            fields,
        })
    }

    pub(crate) fn emit(&self) -> TokenStream2 {
        let name = &self.name;
        let model_name = name.to_string();

        let field_inits = self.fields.iter().map(|field| field.to_descriptor_tokens());
        let set_methods = self.fields.iter().map(|field| field.set_method());
        let with_methods = self.fields.iter().filter_map(|field| field.with_method());
        let set_value_arms = self.fields.iter().map(|field| field.set_value_arm());
        let get_value_arms = self.fields.iter().map(|field| field.get_value_arm());
        let apply_fluent_arms = self.fields.iter().filter_map(|field| field.apply_fluent_arm());

        let validation_blocks = self.fields.iter().filter_map(|field| {
            let ident = &field.ident;
            field.check_snippet().map(|checks| {
                quote! {
                    {
                        let value = &self.#ident;
                        #checks
                    }
                }
            })
        });

        let validated_body = self.validated_body();

        quote! {
            impl #name {
                #(#set_methods)*

                #(#with_methods)*
            }

            impl ::fluent_model::Model for #name {
                fn model_descriptor() -> ::fluent_model::types::ModelDescriptor {
                    ::fluent_model::types::ModelDescriptor {
                        name: #model_name.to_string(),
                        fields: vec![#(#field_inits),*],
                    }
                }

                fn validate(&self) -> ::fluent_model::ValidationResult<()> {
                    #[allow(unused_mut)]
                    let mut issues: ::std::vec::Vec<::fluent_model::ValidationIssue> = ::std::vec::Vec::new();
                    #(#validation_blocks)*
                    if issues.is_empty() {
                        ::std::result::Result::Ok(())
                    } else {
                        ::std::result::Result::Err(::fluent_model::ValidationError::new(issues))
                    }
                }

                fn validated(self) -> ::fluent_model::ValidationResult<Self> {
                    ::fluent_model::Model::validate(&self)?;
                    #validated_body
                }
            }

            impl ::fluent_model::DynamicModel for #name {
                #[allow(unused_variables)]
                fn set_value(
                    &mut self,
                    field: &str,
                    value: ::fluent_model::serde_json::Value,
                ) -> ::std::result::Result<(), ::fluent_model::ModelError> {
                    match field {
                        #(#set_value_arms)*
                        _ => ::std::result::Result::Err(::fluent_model::ModelError::UnknownField {
                            model: #model_name.to_string(),
                            field: field.to_string(),
                        }),
                    }
                }

                fn get_value(
                    &self,
                    field: &str,
                ) -> ::std::result::Result<::fluent_model::serde_json::Value, ::fluent_model::ModelError> {
                    match field {
                        #(#get_value_arms)*
                        _ => ::std::result::Result::Err(::fluent_model::ModelError::UnknownField {
                            model: #model_name.to_string(),
                            field: field.to_string(),
                        }),
                    }
                }
            }

            impl ::fluent_model::FluentModel for #name {
                #[allow(unused_variables)]
                fn apply_fluent(
                    &mut self,
                    method: &str,
                    value: ::fluent_model::serde_json::Value,
                ) -> ::std::result::Result<&mut Self, ::fluent_model::ModelError> {
                    match method {
                        #(#apply_fluent_arms)*
                        _ => ::std::result::Result::Err(::fluent_model::ModelError::UnknownSetter {
                            model: #model_name.to_string(),
                            method: method.to_string(),
                        }),
                    }
                }
            }
        }
    }

    /// Body of `Model::validated` after the whole-model check has passed.
    fn validated_body(&self) -> TokenStream2 {
        let finishes: Vec<_> = self
            .fields
            .iter()
            .filter_map(|field| {
                let ident = &field.ident;
                field.finish_snippet().map(|finish| {
                    quote! {
                        let #ident = {
                            let value = #ident;
                            #finish
                            value
                        };
                    }
                })
            })
            .collect();
        if finishes.is_empty() {
            return quote! { ::std::result::Result::Ok(self) };
        }
        let idents: Vec<_> = self.fields.iter().map(|field| &field.ident).collect();
        let recheck = self.fields.iter().any(|field| field.normalize.is_some()).then(|| {
            quote! { ::fluent_model::Model::validate(&model)?; }
        });
        quote! {
            let Self { #(#idents),* } = self;
            #(#finishes)*
            let model = Self { #(#idents),* };
            #recheck
            ::std::result::Result::Ok(model)
        }
    }
}
