//! Injectable parameters.
//!
//! A [`Param`] is anything that can be fetched from an
//! [`Injector`]. Function arguments supplied by
//! [`Injector::invoke`](Injector::invoke) and fields filled by
//! [`Injector::apply`](Injector::apply) are both resolved through this trait.
//!
//! # Built-in Implementations
//!
//! - `Arc<T>` - the value registered for `T`, which may be a capability
//!   such as `Arc<dyn Greeter>`
//! - `()` - nothing
//! - Tuples of `Param` types, fetched left to right

use std::sync::Arc;

use variadics_please::all_tuples;

use crate::descriptor::TypeDescriptor;
use crate::error::InjectError;
use crate::injector::Injector;

/// A value that can be fetched from an [`Injector`].
pub trait Param: Sized {
    /// Fetches this parameter.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if a required value is not registered in the
    /// injector or any of its ancestors.
    fn fetch(injector: &Injector<'_>) -> Result<Self, InjectError>;
}

impl<T: ?Sized + 'static> Param for Arc<T> {
    fn fetch(injector: &Injector<'_>) -> Result<Self, InjectError> {
        let descriptor = TypeDescriptor::of::<T>();
        let Some(value) = injector.get(&descriptor) else {
            tracing::debug!(type_name = descriptor.name(), "no value registered");
            return Err(InjectError::NotFound(descriptor.name()));
        };

        if let Some(held) = value.downcast::<T>() {
            return Ok(held);
        }

        // A value stored with `set` under a capability it declared is still
        // the concrete type; view it through the capability.
        value
            .cast(&descriptor)
            .and_then(|view| view.downcast::<T>())
            .ok_or(InjectError::Mismatch {
                expected: descriptor.name(),
                found: value.type_name(),
            })
    }
}

impl Param for () {
    fn fetch(_injector: &Injector<'_>) -> Result<Self, InjectError> {
        Ok(())
    }
}

macro_rules! impl_param_tuple {
    ($($param:ident),*) => {
        impl<$($param: Param),*> Param for ($($param,)*) {
            fn fetch(injector: &Injector<'_>) -> Result<Self, InjectError> {
                Ok(($($param::fetch(injector)?,)*))
            }
        }
    };
}

all_tuples!(impl_param_tuple, 1, 16, P);
