#[allow(unused_imports)]
use super::*;

mod field;
mod model;

use field::*;

pub(crate) use model::ParsedModel;
