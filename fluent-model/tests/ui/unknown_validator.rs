#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
struct Account {
    #[fluent(validate(email))]
    contact: String,
}

fn main() {}
