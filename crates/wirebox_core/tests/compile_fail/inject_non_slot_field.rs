use wirebox_core::prelude::*;

/// An injected field must be an `Option` of a resolvable parameter.
#[derive(Inject)]
struct Handler {
    #[inject]
    name: String,
}

fn main() {
    let handler = Handler { name: String::new() };
    let _ = handler.name;
}
