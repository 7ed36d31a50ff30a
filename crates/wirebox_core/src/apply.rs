//! Struct field injection.
//!
//! Types implementing [`Inject`] can have their fields populated by
//! [`Injector::apply`]. The implementation is normally generated with
//! `#[derive(Inject)]`:
//!
//! - A field marked `#[inject]` is filled.
//! - A field marked `#[inject = "key"]` is filled when the key is non-empty.
//!   The key is reserved for disambiguation and does not affect resolution.
//! - Unmarked fields are never touched.
//!
//! Marked fields must implement [`Slot`], which in practice means
//! `Option<Arc<T>>`. Fields are visited in declaration order; the first one
//! that cannot be resolved stops injection and is reported. Fields filled
//! before it keep their new values.
//!
//! Deriving `Inject` for an enum or union produces an implementation that
//! does nothing, so applying the injector to such a value always succeeds.
//! The same holds for primitives, strings, `Option`, `Vec`, arrays and
//! slices, which implement `Inject` as a no-op.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_core::prelude::*;
//!
//! struct Database { url: String }
//!
//! #[derive(Default, Inject)]
//! struct Handler {
//!     #[inject]
//!     database: Option<Arc<Database>>,
//!     requests: u64,
//! }
//!
//! let injector = Injector::new().with(Database { url: "postgres://".into() });
//!
//! let mut handler = Handler::default();
//! injector.apply(&mut handler).unwrap();
//! assert_eq!(handler.database.unwrap().url, "postgres://");
//! ```

use crate::error::InjectError;
use crate::injector::Injector;
use crate::param::Param;

/// A value whose marked fields can be filled from an [`Injector`].
pub trait Inject {
    /// Fills every marked field, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] for the first field that cannot be resolved.
    fn inject(&mut self, injector: &Injector<'_>) -> Result<(), InjectError>;
}

impl<T: ?Sized + Inject> Inject for &mut T {
    fn inject(&mut self, injector: &Injector<'_>) -> Result<(), InjectError> {
        (**self).inject(injector)
    }
}

impl<T: ?Sized + Inject> Inject for Box<T> {
    fn inject(&mut self, injector: &Injector<'_>) -> Result<(), InjectError> {
        (**self).inject(injector)
    }
}

// Values without fields to fill. Applying the injector to them succeeds and
// changes nothing.
macro_rules! impl_inject_noop {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Inject for $ty {
                fn inject(&mut self, _injector: &Injector<'_>) -> Result<(), InjectError> {
                    Ok(())
                }
            }
        )*
    };
}

impl_inject_noop!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
);

impl<T> Inject for Option<T> {
    fn inject(&mut self, _injector: &Injector<'_>) -> Result<(), InjectError> {
        Ok(())
    }
}

impl<T> Inject for Vec<T> {
    fn inject(&mut self, _injector: &Injector<'_>) -> Result<(), InjectError> {
        Ok(())
    }
}

impl<T> Inject for [T] {
    fn inject(&mut self, _injector: &Injector<'_>) -> Result<(), InjectError> {
        Ok(())
    }
}

impl<T, const N: usize> Inject for [T; N] {
    fn inject(&mut self, _injector: &Injector<'_>) -> Result<(), InjectError> {
        Ok(())
    }
}

/// A field that can receive an injected value.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be filled by `#[derive(Inject)]`",
    label = "injected fields must be `Option<Arc<T>>`"
)]
pub trait Slot {
    /// Resolves the field's parameter type and stores the result.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] if the value cannot be resolved. The field is
    /// left unchanged in that case.
    fn fill(&mut self, injector: &Injector<'_>) -> Result<(), InjectError>;
}

impl<P: Param> Slot for Option<P> {
    fn fill(&mut self, injector: &Injector<'_>) -> Result<(), InjectError> {
        *self = Some(P::fetch(injector)?);
        Ok(())
    }
}
