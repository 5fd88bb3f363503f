#![allow(dead_code)]

use fluent_model::FluentModel;

#[derive(FluentModel)]
struct Wrapper<T> {
    inner: T,
}

fn main() {}
