//! Held values and capability declarations.
//!
//! A [`Value`] is what the registry stores: a shared, type-erased `Arc<T>`
//! together with the [`TypeDescriptor`] of `T` and the table of capabilities
//! the value declared when it was built.
//!
//! # Declaring capabilities
//!
//! Rust cannot ask at runtime whether a type implements a trait, so a
//! concrete type states which capabilities it satisfies through
//! [`Implements`], normally with the [`implements!`](crate::implements) macro.
//! The declaration is attached to a value with [`ValueBuilder::implementing`]:
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_core::descriptor::TypeDescriptor;
//! use wirebox_core::implements;
//! use wirebox_core::value::Value;
//!
//! trait Greeter: Send + Sync {
//!     fn greet(&self) -> String;
//! }
//!
//! struct English;
//! impl Greeter for English {
//!     fn greet(&self) -> String { "hello".into() }
//! }
//!
//! implements!(English => dyn Greeter);
//!
//! let value = Value::builder(English).implementing::<dyn Greeter>().build();
//! let greeter = TypeDescriptor::of::<dyn Greeter>();
//!
//! assert!(value.implements(&greeter));
//! let view = value.cast(&greeter).unwrap();
//! let greeter: Arc<dyn Greeter> = view.downcast().unwrap();
//! assert_eq!(greeter.greet(), "hello");
//! ```

use core::any::Any;
use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

use crate::descriptor::TypeDescriptor;

/// Type-erased storage. The erased value is always an `Arc<T>`.
type Erased = Arc<dyn Any + Send + Sync>;

/// Converts an erased `Arc<T>` into an erased `Arc<I>` for one capability `I`.
type Upcast = fn(&Erased) -> Option<Erased>;

/// Declares that `Self` satisfies the capability `I`.
///
/// Implement this through [`implements!`](crate::implements) rather than by
/// hand; the body is always the unsizing coercion `self`.
pub trait Implements<I: ?Sized>: Send + Sync + 'static {
    /// Views this shared value as the capability `I`.
    fn upcast(self: Arc<Self>) -> Arc<I>;
}

/// Implements [`Implements`] for a concrete type and a list of capabilities.
///
/// ```
/// use wirebox_core::implements;
///
/// trait Named: Send + Sync {}
/// trait Greeter: Send + Sync {}
///
/// struct English;
/// impl Named for English {}
/// impl Greeter for English {}
///
/// implements!(English => dyn Greeter, dyn Named);
/// ```
#[macro_export]
macro_rules! implements {
    ($ty:ty => $($capability:ty),+ $(,)?) => {
        $(
            impl $crate::value::Implements<$capability> for $ty {
                fn upcast(
                    self: ::std::sync::Arc<Self>,
                ) -> ::std::sync::Arc<$capability> {
                    self
                }
            }
        )+
    };
}

fn upcast_erased<T, I>(data: &Erased) -> Option<Erased>
where
    T: Implements<I>,
    I: ?Sized + Send + Sync + 'static,
{
    let concrete = data.downcast_ref::<Arc<T>>()?;
    let view: Arc<I> = <T as Implements<I>>::upcast(Arc::clone(concrete));
    let erased: Erased = Arc::new(view);
    Some(erased)
}

/// A value held by the registry.
///
/// Cloning a `Value` is cheap: it shares the underlying object.
#[derive(Clone)]
pub struct Value {
    descriptor: TypeDescriptor,
    data: Erased,
    capabilities: Arc<HashMap<TypeDescriptor, Upcast>>,
}

impl Value {
    /// Wraps `value`, keyed by its own type and declaring no capabilities.
    #[must_use]
    pub fn new<T: Send + Sync + 'static>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wraps an already shared value. `T` may be unsized, e.g. `dyn Trait`.
    #[must_use]
    pub fn from_arc<T: ?Sized + Send + Sync + 'static>(value: Arc<T>) -> Self {
        let data: Erased = Arc::new(value);
        Self {
            descriptor: TypeDescriptor::of::<T>(),
            data,
            capabilities: Arc::default(),
        }
    }

    /// Starts building a value that declares capabilities.
    #[must_use]
    pub fn builder<T: Send + Sync + 'static>(value: T) -> ValueBuilder<T> {
        ValueBuilder::new(Arc::new(value))
    }

    /// Returns the descriptor of the held type.
    #[must_use]
    pub fn descriptor(&self) -> TypeDescriptor {
        self.descriptor
    }

    /// Returns the name of the held type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.descriptor.name()
    }

    /// Returns `true` if the held type is `T`.
    #[must_use]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.data.is::<Arc<T>>()
    }

    /// Returns the held value if its type is `T`.
    #[must_use]
    pub fn downcast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        self.data.downcast_ref::<Arc<T>>().cloned()
    }

    /// Returns `true` if this value can stand in for `capability`.
    ///
    /// A value always satisfies its own type; otherwise the capability must
    /// have been declared when the value was built. The check is a single
    /// table lookup.
    #[must_use]
    pub fn implements(&self, capability: &TypeDescriptor) -> bool {
        self.descriptor == *capability || self.capabilities.contains_key(capability)
    }

    /// Returns this value viewed as `capability`, sharing the same object.
    ///
    /// Returns `None` if the value does not implement `capability`.
    #[must_use]
    pub fn cast(&self, capability: &TypeDescriptor) -> Option<Value> {
        if self.descriptor == *capability {
            return Some(self.clone());
        }
        let upcast = self.capabilities.get(capability)?;
        let data = upcast(&self.data)?;
        Some(Value {
            descriptor: *capability,
            data,
            capabilities: Arc::default(),
        })
    }

    /// Iterates over the capabilities declared for this value.
    pub fn capabilities(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.capabilities.keys()
    }

    /// Returns `true` if both values hold the same erased allocation.
    ///
    /// Capability views produced by [`cast`](Self::cast) are new allocations
    /// and never compare equal to the value they came from.
    #[must_use]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.descriptor.name())
            .field(
                "capabilities",
                &self
                    .capabilities
                    .keys()
                    .map(TypeDescriptor::name)
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for a [`Value`] whose concrete type declares capabilities.
///
/// Created by [`Value::builder`].
pub struct ValueBuilder<T> {
    value: Arc<T>,
    capabilities: HashMap<TypeDescriptor, Upcast>,
}

impl<T: Send + Sync + 'static> ValueBuilder<T> {
    /// Starts a builder around an already shared value.
    #[must_use]
    pub fn new(value: Arc<T>) -> Self {
        Self {
            value,
            capabilities: HashMap::new(),
        }
    }

    /// Declares that the value satisfies the capability `I`.
    #[must_use]
    pub fn implementing<I>(mut self) -> Self
    where
        I: ?Sized + Send + Sync + 'static,
        T: Implements<I>,
    {
        self.capabilities.insert(
            TypeDescriptor::interface_of::<I>(),
            upcast_erased::<T, I> as Upcast,
        );
        self
    }

    /// Finishes the value.
    #[must_use]
    pub fn build(self) -> Value {
        let data: Erased = Arc::new(self.value);
        Value {
            descriptor: TypeDescriptor::of::<T>(),
            data,
            capabilities: Arc::new(self.capabilities),
        }
    }
}

impl<T: Send + Sync + 'static> From<ValueBuilder<T>> for Value {
    fn from(builder: ValueBuilder<T>) -> Self {
        builder.build()
    }
}
