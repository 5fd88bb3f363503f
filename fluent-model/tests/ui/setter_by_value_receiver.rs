#![allow(dead_code)]

use fluent_model::{FluentModel, fluent_setter};

#[derive(Default, FluentModel)]
struct Note {
    body: String,
}

impl Note {
    #[fluent_setter(body)]
    fn rename(self, value: String) {}
}

fn main() {}
