//! Runtime dependency injection keyed by type.
//!
//! See [`wirebox_core`] for the injector, field injection and function
//! invocation.

pub use wirebox_core;
pub use wirebox_core::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use wirebox_core::prelude::*;
}
