#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
struct Counter {
    #[fluent(validate(length(max = 3)))]
    count: u32,
}

fn main() {}
