//! Derive and invoke through the `wirebox` umbrella crate.

use std::sync::Arc;

use wirebox::prelude::*;

struct Config {
    name: String,
}

#[derive(Default, Inject)]
struct Handler {
    #[inject]
    config: Option<Arc<Config>>,
}

#[test]
fn derive_through_umbrella() {
    let injector = Injector::new().with(Config {
        name: "umbrella".into(),
    });

    let mut handler = Handler::default();
    injector.apply(&mut handler).unwrap();
    assert_eq!(handler.config.unwrap().name, "umbrella");
}

#[test]
fn core_reexported_under_its_own_name() {
    let descriptor = wirebox::wirebox_core::descriptor::TypeDescriptor::of::<Config>();
    assert_eq!(descriptor, wirebox::descriptor::TypeDescriptor::of::<Config>());
}
