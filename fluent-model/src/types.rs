use serde_json::Value;

use crate::errors::{ModelError, ValidationResult};

/// Static description of a model type, emitted by `#[derive(FluentModel)]`.
#[derive(Debug, Default, Clone)]
pub struct ModelDescriptor {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldDescriptor {
    pub name: String,
    /// Declared Rust type, as written in the struct.
    pub type_name: String,
    pub optional: bool,
    pub nested: bool,
    pub validations: Vec<ValidationRule>,
    pub setter: SetterMode,
}

/// How a field's `with_<field>` method comes to exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetterMode {
    /// Written by the derive.
    #[default]
    Generated,
    /// Written by the type author; the derive only routes to it.
    Custom,
    /// No fluent setter at all.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRule {
    Length { min: Option<usize>, max: Option<usize> },
    Range { min: Option<String>, max: Option<String> },
    Regex { pattern: String },
    Custom { path: String },
}

/// A structured record with named, typed fields and validation on assignment.
pub trait Model: Sized {
    fn model_descriptor() -> ModelDescriptor;

    /// Checks every field, reporting all issues at once.
    fn validate(&self) -> ValidationResult<()>;

    /// Validates, then applies per-field normalizers.
    fn validated(self) -> ValidationResult<Self>;
}

/// Name-addressed access to a model's fields.
pub trait DynamicModel: Model {
    fn set_value(&mut self, field: &str, value: Value) -> Result<(), ModelError>;

    fn get_value(&self, field: &str) -> Result<Value, ModelError>;
}

/// Name-addressed dispatch to a model's fluent setters.
pub trait FluentModel: DynamicModel {
    fn apply_fluent(&mut self, method: &str, value: Value) -> Result<&mut Self, ModelError>;
}
