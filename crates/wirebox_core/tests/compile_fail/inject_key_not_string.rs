use std::sync::Arc;

use wirebox_core::prelude::*;

#[derive(Inject)]
struct Handler {
    #[inject = 1]
    name: Option<Arc<String>>,
}

fn main() {
    let handler = Handler { name: None };
    let _ = handler.name;
}
