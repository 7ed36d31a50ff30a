//! Type descriptors.
//!
//! A [`TypeDescriptor`] is the identity used to key values in a
//! [`Registry`](crate::registry::Registry). Two descriptors are equal iff they
//! denote the same Rust type.
//!
//! # Kinds
//!
//! | Kind | Example | Resolved through |
//! |------|---------|------------------|
//! | [`TypeKind::Concrete`] | `Config`, `String`, `&'static str` | exact match only |
//! | [`TypeKind::Capability`] | `dyn Greeter`, `dyn Store + Send` | exact match, then the capability scan |
//!
//! Capabilities are trait object types. A concrete value satisfies a
//! capability only if it declared so when it was registered (see
//! [`Implements`](crate::value::Implements)).

use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

/// Whether a descriptor names a concrete type or a capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// Any sized or unsized type that is not a trait object.
    Concrete,
    /// A trait object type (`dyn Trait`).
    Capability,
}

/// Identity of a type, used as a registry key.
///
/// Equality and hashing only consider the underlying [`TypeId`]; the name and
/// kind are derived from it and kept for diagnostics and lookup policy.
///
/// # Example
///
/// ```
/// use wirebox_core::descriptor::{TypeDescriptor, TypeKind};
///
/// trait Greeter {}
///
/// assert_eq!(TypeDescriptor::of::<String>().kind(), TypeKind::Concrete);
/// assert_eq!(TypeDescriptor::of::<dyn Greeter>().kind(), TypeKind::Capability);
/// assert_eq!(TypeDescriptor::of::<u8>(), TypeDescriptor::of::<u8>());
/// ```
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    kind: TypeKind,
}

impl TypeDescriptor {
    /// Returns the descriptor of `T`.
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        let name = core::any::type_name::<T>();
        Self {
            id: TypeId::of::<T>(),
            name,
            kind: kind_of(name),
        }
    }

    /// Returns the descriptor of the capability named by the handle `I`.
    ///
    /// This is the entry point used by
    /// [`Injector::map_to`](crate::injector::Injector::map_to) to key a value
    /// by an abstract capability instead of its concrete type.
    ///
    /// The handle must be the trait object type itself. Indirections are not
    /// looked through: `&dyn Trait`, `&&dyn Trait` and `Box<dyn Trait>` are
    /// concrete types and are rejected like any other. Name the capability as
    /// `dyn Trait` and pass the value as `Arc<dyn Trait>`.
    ///
    /// # Panics
    ///
    /// Panics if `I` is not a trait object type. Passing a concrete type is a
    /// programming error, not a recoverable condition.
    ///
    /// ```should_panic
    /// use wirebox_core::descriptor::TypeDescriptor;
    ///
    /// struct NotACapability;
    /// let _ = TypeDescriptor::interface_of::<NotACapability>();
    /// ```
    #[must_use]
    #[track_caller]
    pub fn interface_of<I: ?Sized + 'static>() -> Self {
        let descriptor = Self::of::<I>();
        assert!(
            descriptor.is_capability(),
            "TypeDescriptor::interface_of called with `{}`, which is not a trait object type; \
             name the capability as `dyn Trait`",
            descriptor.name,
        );
        descriptor
    }

    /// Returns the underlying `TypeId`.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Returns the type name for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the kind of type this descriptor names.
    #[must_use]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns `true` if this descriptor names a capability (`dyn Trait`).
    #[must_use]
    pub fn is_capability(&self) -> bool {
        self.kind == TypeKind::Capability
    }
}

// `type_name` renders trait objects as `dyn path::Trait [+ ...]`. The format is
// not a language guarantee, so the classification is confined to this function.
fn kind_of(name: &str) -> TypeKind {
    if name.starts_with("dyn ") {
        TypeKind::Capability
    } else {
        TypeKind::Concrete
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl Hash for TypeDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
