#[allow(unused_imports)]
use super::*;

pub(crate) struct ParsedField {
    pub(crate) ident: Ident,
    /// Field name with any `r#` prefix removed.
    pub(crate) name: String,
    pub(crate) ty: TypeInfo,
    pub(crate) validations: Vec<FieldValidation>,
    pub(crate) normalize: Option<Path>,
    pub(crate) nested: bool,
    pub(crate) setter: SetterMode,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum SetterMode {
    Generated,
    Custom,
    Skipped,
}

#[derive(Clone)]
pub(crate) struct TypeInfo {
    pub(crate) optional: bool,
    pub(crate) base: FieldBase,
    pub(crate) ty: Type,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum FieldBase {
    String,
    Vec,
    Numeric,
    Float,
    Boolean,
    Other,
}

pub(crate) enum FieldValidation {
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    Range {
        min: Option<TokenStream2>,
        min_repr: Option<String>,
        max: Option<TokenStream2>,
        max_repr: Option<String>,
    },
    Regex {
        pattern: String,
    },
    Custom {
        path: TokenStream2,
        path_repr: String,
    },
}
