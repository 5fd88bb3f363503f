#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
struct Account {
    #[fluent(validate(length(min = 5, max = 2)))]
    name: String,
}

fn main() {}
