#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
struct Handle {
    #[fluent(validate(regex = "[a-z"))]
    name: String,
}

fn main() {}
