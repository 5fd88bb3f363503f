#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
enum Status {
    Draft,
    Published,
}

fn main() {}
