//! The dependency injector.
//!
//! An [`Injector`] owns a [`Registry`] and optionally borrows a parent
//! injector. Values are registered with [`map`](Injector::map),
//! [`map_to`](Injector::map_to), [`map_value`](Injector::map_value) and
//! [`set`](Injector::set); they are consumed by [`apply`](Injector::apply)
//! (struct fields) and [`invoke`](Injector::invoke) (function arguments),
//! both of which resolve each type through [`get`](Injector::get).
//!
//! # Lookup Order
//!
//! For a descriptor `t`, [`get`](Injector::get) returns the first of:
//!
//! 1. the value registered under exactly `t` in this injector;
//! 2. if `t` is a capability, any value in this injector that implements it;
//! 3. the result of the same lookup on the parent injector.
//!
//! Exact registrations win over capability matches, and local matches of
//! either kind win over anything in the parent chain.
//!
//! ```text
//! root (Config, Database)
//!    │
//!    └── request scope (Session)
//!           │
//!           └── handler scope (dyn Greeter -> English)
//! ```
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_core::prelude::*;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self, name: &str) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self, name: &str) -> String { format!("hello {name}") }
//! }
//!
//! struct UserName(String);
//!
//! let mut root = Injector::new();
//! root.map(UserName("ada".into()));
//!
//! let mut scope = root.child();
//! scope.map_to::<dyn Greeter>(Arc::new(English));
//!
//! let greeting = scope
//!     .invoke(|greeter: Arc<dyn Greeter>, name: Arc<UserName>| greeter.greet(&name.0))
//!     .unwrap();
//! assert_eq!(greeting, "hello ada");
//! ```

use std::sync::Arc;

use crate::apply::Inject;
use crate::descriptor::TypeDescriptor;
use crate::error::InjectError;
use crate::invoke::Invocable;
use crate::param::Param;
use crate::registry::Registry;
use crate::value::Value;

/// A registry of values with an optional parent for fallback lookups.
///
/// # Ownership Model
///
/// ```text
/// Injector<'parent>
/// ├── parent: Option<&'parent Injector>  (read-only, replaceable)
/// └── registry: Registry                 (owned, this scope's values)
/// ```
///
/// Registration needs `&mut self`, resolution only `&self`. A parent is
/// borrowed for as long as a child refers to it, so it cannot be modified
/// while the child exists and a chain can never loop back on itself.
pub struct Injector<'parent> {
    /// Fallback for lookups that fail locally.
    parent: Option<&'parent Injector<'parent>>,
    /// Values owned by this injector.
    registry: Registry,
}

impl Default for Injector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'parent> Injector<'parent> {
    /// Creates an empty injector with no parent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: None,
            registry: Registry::new(),
        }
    }

    /// Builder pattern: maps a value and returns self.
    ///
    /// # Example
    ///
    /// ```
    /// # use wirebox_core::injector::Injector;
    /// struct Counter { value: i32 }
    /// struct Config { name: String }
    ///
    /// let injector = Injector::new()
    ///     .with(Counter { value: 0 })
    ///     .with(Config { name: "test".into() });
    /// ```
    #[must_use]
    pub fn with<T: Send + Sync + 'static>(mut self, value: T) -> Self {
        self.map(value);
        self
    }

    /// Creates an empty injector whose parent is `self`.
    #[must_use]
    pub fn child(&'parent self) -> Injector<'parent> {
        Injector {
            parent: Some(self),
            registry: Registry::new(),
        }
    }

    /// Sets the parent consulted when a lookup fails locally, replacing any
    /// previous parent.
    pub fn set_parent(&mut self, parent: &'parent Injector<'parent>) {
        self.parent = Some(parent);
    }

    /// Returns the parent injector, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'parent Injector<'parent>> {
        self.parent
    }

    /// Returns this injector's own registry.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    // ─────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────

    /// Maps `value` under its own type, replacing any previous value of that
    /// type in this injector.
    pub fn map<T: Send + Sync + 'static>(&mut self, value: T) -> &mut Self {
        self.map_value(Value::new(value))
    }

    /// Maps an already shared value under `T`, which may be unsized.
    pub fn map_arc<T: ?Sized + Send + Sync + 'static>(&mut self, value: Arc<T>) -> &mut Self {
        self.map_value(Value::from_arc(value))
    }

    /// Maps `value` under the capability `I` rather than its concrete type.
    ///
    /// Concrete values coerce at the call site:
    ///
    /// ```
    /// # use std::sync::Arc;
    /// # use wirebox_core::injector::Injector;
    /// # use wirebox_core::descriptor::TypeDescriptor;
    /// trait Store: Send + Sync {}
    /// struct Memory;
    /// impl Store for Memory {}
    ///
    /// let mut injector = Injector::new();
    /// injector.map_to::<dyn Store>(Arc::new(Memory));
    /// assert!(injector.contains_local(&TypeDescriptor::of::<dyn Store>()));
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `I` is not a trait object type; see
    /// [`TypeDescriptor::interface_of`].
    #[track_caller]
    pub fn map_to<I: ?Sized + Send + Sync + 'static>(&mut self, value: Arc<I>) -> &mut Self {
        let descriptor = TypeDescriptor::interface_of::<I>();
        self.set(descriptor, Value::from_arc(value))
    }

    /// Maps a prebuilt value under its own type.
    ///
    /// Use this with [`Value::builder`] to register a value together with the
    /// capabilities it satisfies.
    pub fn map_value(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        self.set(value.descriptor(), value)
    }

    /// Stores `value` under `descriptor` without deriving the key.
    ///
    /// This allows a value to be keyed by a type other than its own, for
    /// example a marker type standing in for a second value of the same type.
    pub fn set(&mut self, descriptor: TypeDescriptor, value: Value) -> &mut Self {
        tracing::trace!(
            key = descriptor.name(),
            value_type = value.type_name(),
            "registering value"
        );
        self.registry.insert(descriptor, value);
        self
    }

    // ─────────────────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────────────────

    /// Returns the value that satisfies `descriptor`, searching this injector
    /// and then its ancestors.
    ///
    /// Returns `None` if nothing in the chain satisfies it. When several local
    /// values implement a requested capability, which one is returned is
    /// unspecified.
    #[must_use]
    pub fn get(&self, descriptor: &TypeDescriptor) -> Option<Value> {
        if let Some(value) = self.registry.get(descriptor) {
            return Some(value.clone());
        }

        if descriptor.is_capability() {
            let view = self.registry.find_implementor(descriptor).and_then(|implementor| {
                tracing::trace!(
                    capability = descriptor.name(),
                    implementor = implementor.type_name(),
                    "resolved capability by implementor scan"
                );
                implementor.cast(descriptor)
            });
            if view.is_some() {
                return view;
            }
        }

        let parent = self.parent?;
        tracing::trace!(type_name = descriptor.name(), "delegating lookup to parent");
        parent.get(descriptor)
    }

    /// Resolves the value registered for `T`.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError::NotFound`] if nothing in the chain satisfies `T`.
    pub fn resolve<T: ?Sized + 'static>(&self) -> Result<Arc<T>, InjectError> {
        <Arc<T> as Param>::fetch(self)
    }

    /// Returns `true` if `descriptor` resolves anywhere in the chain.
    #[must_use]
    pub fn contains(&self, descriptor: &TypeDescriptor) -> bool {
        self.get(descriptor).is_some()
    }

    /// Returns `true` if a value is registered under exactly `descriptor` in
    /// this injector.
    #[must_use]
    pub fn contains_local(&self, descriptor: &TypeDescriptor) -> bool {
        self.registry.contains(descriptor)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Consumers
    // ─────────────────────────────────────────────────────────────────────

    /// Fills the marked fields of `target`.
    ///
    /// See [`apply`](crate::apply) for which fields are eligible.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] for the first marked field that cannot be
    /// resolved. Fields filled before it are not rolled back.
    pub fn apply<T: ?Sized + Inject>(&self, target: &mut T) -> Result<(), InjectError> {
        target.inject(self)
    }

    /// Calls `f` with arguments resolved from this injector and returns what
    /// `f` returns.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] for the first argument that cannot be resolved;
    /// `f` is not called in that case.
    pub fn invoke<Params, F: Invocable<Params>>(&self, f: F) -> Result<F::Output, InjectError> {
        f.invoke(self)
    }
}
