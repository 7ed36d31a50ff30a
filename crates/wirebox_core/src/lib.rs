//! Runtime dependency injection keyed by type.
//!
//! `wirebox_core` provides a small injector that stores shared values by
//! their type and hands them out again to struct fields and function
//! arguments:
//!
//! - [`descriptor`] - Type identities and the concrete/capability split
//! - [`value`] - Held values and capability declarations
//! - [`registry`] - Storage of values by descriptor
//! - [`injector`] - Registration, lookup and parent chains
//! - [`apply`] - Filling struct fields
//! - [`invoke`] - Calling functions with resolved arguments
//! - [`macro@Inject`] - Derive macro for field injection
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_core::prelude::*;
//!
//! trait Store: Send + Sync {
//!     fn get(&self, key: &str) -> Option<String>;
//! }
//!
//! struct Memory;
//! impl Store for Memory {
//!     fn get(&self, key: &str) -> Option<String> {
//!         (key == "greeting").then(|| "hi".to_owned())
//!     }
//! }
//!
//! #[derive(Default, Inject)]
//! struct Service {
//!     #[inject]
//!     store: Option<Arc<dyn Store>>,
//! }
//!
//! let mut injector = Injector::new();
//! injector.map_to::<dyn Store>(Arc::new(Memory));
//!
//! let mut service = Service::default();
//! injector.apply(&mut service).unwrap();
//! assert!(service.store.is_some());
//!
//! let greeting = injector
//!     .invoke(|store: Arc<dyn Store>| store.get("greeting"))
//!     .unwrap();
//! assert_eq!(greeting.as_deref(), Some("hi"));
//! ```

// Lets `#[derive(Inject)]` output name `wirebox_core::` paths inside this crate.
extern crate self as wirebox_core;

/// Struct field injection.
pub mod apply;

/// Type identities.
pub mod descriptor;

/// Resolution errors.
pub mod error;

/// The injector and its parent chain.
pub mod injector;

/// Function invocation with injected arguments.
pub mod invoke;

/// Injectable parameter types.
pub mod param;

/// Storage of values by descriptor.
pub mod registry;

/// Held values and capability declarations.
pub mod value;

/// Re-export the `#[derive(Inject)]` macro.
#[cfg(feature = "derive")]
pub use wirebox_core_macros::Inject;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use crate::apply::{Inject, Slot};
    pub use crate::descriptor::{TypeDescriptor, TypeKind};
    pub use crate::error::InjectError;
    pub use crate::implements;
    pub use crate::injector::Injector;
    pub use crate::invoke::Invocable;
    pub use crate::param::Param;
    pub use crate::registry::Registry;
    pub use crate::value::{Implements, Value, ValueBuilder};

    #[cfg(feature = "derive")]
    pub use wirebox_core_macros::Inject;
}
