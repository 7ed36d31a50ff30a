use std::marker::PhantomData;
use std::sync::Arc;

use wirebox_core::prelude::*;

struct Config;

#[derive(Default, Inject)]
struct Pair(#[inject] Option<Arc<Config>>, u8);

#[derive(Inject)]
struct Wrapper<T: Send + Sync + 'static> {
    #[inject]
    inner: Option<Arc<T>>,
    marker: PhantomData<T>,
}

#[derive(Inject)]
struct Empty;

fn main() {
    let injector = Injector::new().with(Config);

    let mut pair = Pair::default();
    let _ = injector.apply(&mut pair);
    let _ = (pair.0, pair.1);

    let mut wrapper = Wrapper::<Config> {
        inner: None,
        marker: PhantomData,
    };
    let _ = injector.apply(&mut wrapper);
    let _ = (wrapper.inner, wrapper.marker);

    let _ = injector.apply(&mut Empty);
}
