//! Chainable, validated field setters for plain Rust structs.
//!
//! `#[derive(FluentModel)]` writes a validated `set_<field>` and a chaining
//! `with_<field>` for every field, so configuration reads as one expression:
//!
//! ```
//! use fluent_model::FluentModel;
//!
//! #[derive(Debug, Default, FluentModel)]
//! struct Post {
//!     likes: i64,
//!     #[fluent(validate(length(max = 5)))]
//!     tag: String,
//! }
//!
//! # fn main() -> Result<(), fluent_model::ValidationError> {
//! let mut post = Post::default();
//! post.with_likes(1)?.with_tag("ok")?;
//! assert_eq!(post.likes, 1);
//! assert!(post.with_tag("toolong").is_err());
//! assert_eq!(post.tag, "ok");
//! # Ok(())
//! # }
//! ```
//!
//! A hand-written `with_<field>` must be declared with `#[fluent(custom)]` on the
//! field; otherwise the two definitions collide at compile time:
//!
//! ```compile_fail
//! use fluent_model::FluentModel;
//!
//! #[derive(Default, FluentModel)]
//! struct Post {
//!     tag: String,
//! }
//!
//! impl Post {
//!     pub fn with_tag(&mut self, value: String) -> &mut Self {
//!         self.tag = value;
//!         self
//!     }
//! }
//!
//! fn main() {}
//! ```
//!
//! `#[fluent_setter(field)]` only accepts fields the model declares:
//!
//! ```compile_fail
//! use fluent_model::{FluentModel, fluent_setter};
//!
//! #[derive(Default, FluentModel)]
//! struct Post {
//!     tag: String,
//! }
//!
//! impl Post {
//!     #[fluent_setter(title)]
//!     pub fn headline(&mut self, value: String) {}
//! }
//!
//! fn main() {}
//! ```

extern crate self as fluent_model;

pub mod errors;
pub mod examples;
pub mod fluent;
pub mod json;
pub mod registry;
pub mod types;

pub use errors::*;
pub use fluent::{FluentSetter, SETTER_PREFIX, fluent_setter, setter_name};
pub use fluent_model_macros::{FluentModel, fluent_setter};
pub use json::{from_json, from_value, to_json};
pub use registry::{SetterEntry, SetterOrigin, SetterRegistry, generate_fluent_setters, get_fluent_setters};
pub use types::{DynamicModel, FieldDescriptor, FluentModel, Model, ModelDescriptor, SetterMode, ValidationRule};

// Re-exported for generated code.
pub use regex;
pub use serde_json;
