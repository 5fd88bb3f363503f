use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use serde_json::Value;

use crate::errors::ModelError;
use crate::fluent::setter_name;
use crate::types::{FluentModel, ModelDescriptor, SetterMode};

static REGISTRY: OnceLock<RwLock<HashMap<TypeId, Arc<SetterRegistry>>>> = OnceLock::new();

fn registry() -> &'static RwLock<HashMap<TypeId, Arc<SetterRegistry>>> {
    REGISTRY.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Where a registered fluent setter comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterOrigin {
    Generated,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterEntry {
    pub field: String,
    pub method: String,
    pub origin: SetterOrigin,
}

/// The fluent setters of one model type, keyed by method name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetterRegistry {
    model: String,
    entries: BTreeMap<String, SetterEntry>,
}

impl SetterRegistry {
    /// Builds the registry from a descriptor. Each field is visited once; a method name
    /// already present is never replaced.
    pub fn build(descriptor: &ModelDescriptor) -> Self {
        let mut entries = BTreeMap::new();
        for field in &descriptor.fields {
            let origin = match field.setter {
                SetterMode::Generated => SetterOrigin::Generated,
                SetterMode::Custom => SetterOrigin::Custom,
                SetterMode::Skipped => continue,
            };
            let method = setter_name(&field.name);
            entries.entry(method.clone()).or_insert_with(|| SetterEntry {
                field: field.name.clone(),
                method,
                origin,
            });
        }
        Self {
            model: descriptor.name.clone(),
            entries,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn get(&self, method: &str) -> Option<&SetterEntry> {
        self.entries.get(method)
    }

    pub fn contains(&self, method: &str) -> bool {
        self.entries.contains_key(method)
    }

    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = &SetterEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Calls the setter named `method` on `model` and returns the same instance.
    pub fn invoke<'m, M>(&self, model: &'m mut M, method: &str, value: Value) -> Result<&'m mut M, ModelError>
    where
        M: FluentModel,
    {
        if !self.contains(method) {
            return Err(ModelError::UnknownSetter {
                model: self.model.clone(),
                method: method.to_string(),
            });
        }
        log::trace!("{}::{} via registry", self.model, method);
        model.apply_fluent(method, value)
    }
}

/// Returns the setter registry for `M`, building it on first use.
///
/// Repeated calls hand back the same registry, so calling this more than once per
/// type changes nothing.
pub fn generate_fluent_setters<M>() -> Arc<SetterRegistry>
where
    M: FluentModel + 'static,
{
    let key = TypeId::of::<M>();
    let existing = registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .cloned();
    if let Some(existing) = existing {
        return existing;
    }

    let built = SetterRegistry::build(&M::model_descriptor());
    let mut guard = registry().write().unwrap_or_else(PoisonError::into_inner);
    let entry = guard.entry(key).or_insert_with(|| {
        log::debug!("generated {} fluent setters for {}", built.len(), built.model());
        Arc::new(built)
    });
    Arc::clone(entry)
}

/// Returns the registry for `M` if it has already been generated.
pub fn get_fluent_setters<M>() -> Option<Arc<SetterRegistry>>
where
    M: FluentModel + 'static,
{
    registry()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&TypeId::of::<M>())
        .cloned()
}
