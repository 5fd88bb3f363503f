#![allow(dead_code)]

use fluent_model::{FluentModel, fluent_setter};

#[derive(Default, FluentModel)]
struct Note {
    body: String,
}

impl Note {
    #[fluent_setter()]
    fn rename(&mut self, value: String) {}
}

fn main() {}
