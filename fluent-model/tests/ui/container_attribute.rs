#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
#[fluent(skip)]
struct Account {
    name: String,
}

fn main() {}
