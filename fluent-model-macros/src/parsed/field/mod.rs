#[allow(unused_imports)]
use super::*;

mod defs;
mod parsed_field_impl;
mod validation_emit;
mod validation_helpers;

pub(crate) use defs::*;
use validation_emit::*;
use validation_helpers::*;
