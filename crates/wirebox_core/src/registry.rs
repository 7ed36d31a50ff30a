//! Registry storage.
//!
//! A [`Registry`] maps [`TypeDescriptor`]s to [`Value`]s. It holds at most
//! one value per descriptor; inserting under an existing descriptor replaces
//! the previous value.
//!
//! The registry is a plain map. Parent delegation and the resolution policy
//! live in [`Injector`](crate::injector::Injector).

use hashbrown::HashMap;

use crate::descriptor::TypeDescriptor;
use crate::value::Value;

/// Container mapping type descriptors to held values.
///
/// # Example
///
/// ```
/// use wirebox_core::descriptor::TypeDescriptor;
/// use wirebox_core::registry::Registry;
/// use wirebox_core::value::Value;
///
/// struct Counter { value: i32 }
///
/// let mut registry = Registry::new();
/// let key = TypeDescriptor::of::<Counter>();
///
/// assert!(registry.insert(key, Value::new(Counter { value: 1 })).is_none());
/// let old = registry.insert(key, Value::new(Counter { value: 2 }));
/// assert_eq!(old.unwrap().downcast::<Counter>().unwrap().value, 1);
///
/// let current = registry.get(&key).unwrap().downcast::<Counter>().unwrap();
/// assert_eq!(current.value, 2);
/// ```
#[derive(Default, Clone, Debug)]
pub struct Registry {
    storage: HashMap<TypeDescriptor, Value>,
}

impl Registry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: HashMap::new(),
        }
    }

    /// Inserts a value under `descriptor`, returning the value it replaced.
    pub fn insert(&mut self, descriptor: TypeDescriptor, value: Value) -> Option<Value> {
        self.storage.insert(descriptor, value)
    }

    /// Returns the value stored under exactly `descriptor`.
    #[must_use]
    pub fn get(&self, descriptor: &TypeDescriptor) -> Option<&Value> {
        self.storage.get(descriptor)
    }

    /// Returns the first stored value that implements `capability`.
    ///
    /// Entries are visited in the map's iteration order, which is unspecified.
    /// When several values implement the capability, which one is returned is
    /// not defined.
    #[must_use]
    pub fn find_implementor(&self, capability: &TypeDescriptor) -> Option<&Value> {
        self.storage
            .values()
            .find(|value| value.implements(capability))
    }

    /// Returns `true` if a value is stored under exactly `descriptor`.
    #[must_use]
    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.storage.contains_key(descriptor)
    }

    /// Removes and returns the value stored under `descriptor`.
    pub fn remove(&mut self, descriptor: &TypeDescriptor) -> Option<Value> {
        self.storage.remove(descriptor)
    }

    /// Iterates over all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&TypeDescriptor, &Value)> {
        self.storage.iter()
    }

    /// Removes all values.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counter {
        value: i32,
    }

    #[derive(Debug, PartialEq)]
    struct Name(String);

    trait Greeter: Send + Sync {}

    struct English;
    impl Greeter for English {}
    crate::implements!(English => dyn Greeter);

    fn key<T: 'static>() -> TypeDescriptor {
        TypeDescriptor::of::<T>()
    }

    #[test]
    fn insert_and_get() {
        let mut registry = Registry::new();
        registry.insert(key::<Counter>(), Value::new(Counter { value: 42 }));

        let counter = registry.get(&key::<Counter>()).unwrap();
        assert_eq!(counter.downcast::<Counter>().unwrap().value, 42);
    }

    #[test]
    fn insert_replaces_existing() {
        let mut registry = Registry::new();
        registry.insert(key::<Counter>(), Value::new(Counter { value: 1 }));

        let old = registry
            .insert(key::<Counter>(), Value::new(Counter { value: 2 }))
            .unwrap();
        assert_eq!(*old.downcast::<Counter>().unwrap(), Counter { value: 1 });
        assert_eq!(registry.len(), 1);

        let counter = registry.get(&key::<Counter>()).unwrap();
        assert_eq!(counter.downcast::<Counter>().unwrap().value, 2);
    }

    #[test]
    fn multiple_types() {
        let mut registry = Registry::new();
        registry.insert(key::<Counter>(), Value::new(Counter { value: 42 }));
        registry.insert(key::<Name>(), Value::new(Name("Alice".into())));

        assert_eq!(registry.len(), 2);
        let name = registry.get(&key::<Name>()).unwrap();
        assert_eq!(name.downcast::<Name>().unwrap().0, "Alice");
    }

    #[test]
    fn key_may_differ_from_held_type() {
        struct Primary;

        let mut registry = Registry::new();
        registry.insert(key::<Primary>(), Value::new(Name("primary".into())));

        let value = registry.get(&key::<Primary>()).unwrap();
        assert_eq!(value.descriptor(), key::<Name>());
        assert!(!registry.contains(&key::<Name>()));
    }

    #[test]
    fn find_implementor_uses_declared_capabilities() {
        let mut registry = Registry::new();
        registry.insert(key::<Counter>(), Value::new(Counter { value: 0 }));
        assert!(
            registry
                .find_implementor(&TypeDescriptor::of::<dyn Greeter>())
                .is_none()
        );

        registry.insert(
            key::<English>(),
            Value::builder(English).implementing::<dyn Greeter>().build(),
        );
        let found = registry
            .find_implementor(&TypeDescriptor::of::<dyn Greeter>())
            .unwrap();
        assert!(found.is::<English>());
    }

    #[test]
    fn remove_and_clear() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert(key::<Counter>(), Value::new(Counter { value: 1 }));
        registry.insert(key::<Name>(), Value::new(Name("Test".into())));
        assert!(registry.contains(&key::<Counter>()));

        let removed = registry.remove(&key::<Counter>()).unwrap();
        assert_eq!(removed.downcast::<Counter>().unwrap().value, 1);
        assert!(registry.remove(&key::<Counter>()).is_none());

        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.iter().count(), 0);
    }
}
