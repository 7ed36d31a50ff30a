use std::sync::Arc;

use wirebox_core::prelude::*;

#[derive(Inject)]
struct Handler {
    #[inject(key)]
    name: Option<Arc<String>>,
}

fn main() {
    let handler = Handler { name: None };
    let _ = handler.name;
}
