use std::sync::Arc;

use wirebox_core::prelude::*;

struct Config {
    name: String,
}

trait Store: Send + Sync {}

#[derive(Default, Inject)]
struct Handler {
    #[inject]
    config: Option<Arc<Config>>,
    #[inject = "primary"]
    store: Option<Arc<dyn Store>>,
    #[inject = ""]
    skipped: Option<Arc<Config>>,
    hits: u64,
}

fn main() {
    let injector = Injector::new().with(Config { name: "c".into() });
    let mut handler = Handler::default();
    let _ = injector.apply(&mut handler);
    let _ = (&handler.config, &handler.store, &handler.skipped, handler.hits);
    let _ = handler.config.map(|config| config.name.len());
}
