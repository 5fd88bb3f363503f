#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
struct Account {
    #[fluent(custom, skip)]
    name: String,
}

fn main() {}
