use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

use crate::errors::ModelError;
use crate::types::DynamicModel;

pub const SETTER_PREFIX: &str = "with_";

/// Name of the fluent setter for `field`: `with_` followed by the field name.
///
/// A raw-identifier prefix is dropped, so `r#type` maps to `with_type`.
pub fn setter_name(field: &str) -> String {
    let field = field.strip_prefix("r#").unwrap_or(field);
    format!("{}{}", SETTER_PREFIX, field)
}

type Assign<M, V> = Box<dyn Fn(&mut M, V) -> Result<(), ModelError> + Send + Sync>;

/// A setter bound to one field that hands the model back after assigning.
///
/// Built with [`fluent_setter`] from any assignment function, or with
/// [`FluentSetter::dynamic`] for name-addressed assignment.
pub struct FluentSetter<M, V> {
    field: Cow<'static, str>,
    assign: Assign<M, V>,
}

/// Wraps `assign` so that applying it returns the same model for chaining.
///
/// Whatever `assign` does, [`FluentSetter::apply`] returns the instance it was given;
/// errors from `assign` propagate unchanged.
pub fn fluent_setter<M, V, F, E>(field: impl Into<Cow<'static, str>>, assign: F) -> FluentSetter<M, V>
where
    M: 'static,
    V: 'static,
    F: Fn(&mut M, V) -> Result<(), E> + Send + Sync + 'static,
    E: Into<ModelError>,
{
    FluentSetter {
        field: field.into(),
        assign: Box::new(move |model: &mut M, value: V| assign(model, value).map_err(Into::into)),
    }
}

impl<M, V> FluentSetter<M, V> {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn method(&self) -> String {
        setter_name(&self.field)
    }

    /// Assigns `value` and returns `model` itself.
    pub fn apply<'m>(&self, model: &'m mut M, value: V) -> Result<&'m mut M, ModelError> {
        (self.assign)(&mut *model, value)?;
        Ok(model)
    }
}

impl<M> FluentSetter<M, Value>
where
    M: DynamicModel + 'static,
{
    /// A setter that assigns through [`DynamicModel::set_value`].
    ///
    /// The field name is not checked here; an unknown name fails on `apply` with
    /// [`ModelError::UnknownField`].
    pub fn dynamic(field: impl Into<Cow<'static, str>>) -> Self {
        let target = field.into();
        fluent_setter(target.clone(), move |model: &mut M, value: Value| {
            log::trace!("dynamic assignment to `{}`", target);
            model.set_value(&target, value)
        })
    }
}

impl<M, V> fmt::Debug for FluentSetter<M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FluentSetter").field("field", &self.field).finish()
    }
}
