#![allow(dead_code)]

use fluent_model::{FluentModel, fluent_setter};

#[derive(Default, FluentModel)]
struct Note {
    body: String,
}

impl Note {
    #[fluent_setter(body)]
    fn rename(&mut self, first: String, second: String) {}
}

fn main() {}
