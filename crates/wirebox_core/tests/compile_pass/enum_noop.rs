use wirebox_core::prelude::*;

#[derive(Inject)]
enum Mode {
    Fast,
    Slow(u32),
}

fn main() {
    let injector = Injector::new();
    let mut mode = Mode::Slow(3);
    assert!(injector.apply(&mut mode).is_ok());
    if let Mode::Slow(n) = mode {
        assert_eq!(n, 3);
    }
    let _ = Mode::Fast;
}
