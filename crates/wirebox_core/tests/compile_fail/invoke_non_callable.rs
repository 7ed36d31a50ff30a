use wirebox_core::injector::Injector;

fn main() {
    let injector = Injector::new();
    let _ = injector.invoke(42_u32);
}
