use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::ModelError;
use crate::types::Model;

/// Parses a model from JSON text, then validates and normalizes it.
pub fn from_json<M>(input: &str) -> Result<M, ModelError>
where
    M: Model + DeserializeOwned,
{
    let model: M = serde_json::from_str(input)?;
    Ok(model.validated()?)
}

/// Same as [`from_json`], starting from an already parsed value.
pub fn from_value<M>(value: Value) -> Result<M, ModelError>
where
    M: Model + DeserializeOwned,
{
    let model: M = serde_json::from_value(value)?;
    Ok(model.validated()?)
}

pub fn to_json<M>(model: &M) -> Result<String, ModelError>
where
    M: Serialize,
{
    Ok(serde_json::to_string(model)?)
}
