//! Resolution errors.

/// Errors reported when a dependency cannot be supplied.
///
/// These are the recoverable failures of [`Injector::apply`] and
/// [`Injector::invoke`]. Contract violations (a concrete type passed where a
/// capability is expected) panic instead.
///
/// [`Injector::apply`]: crate::injector::Injector::apply
/// [`Injector::invoke`]: crate::injector::Injector::invoke
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InjectError {
    /// No value is registered for the type anywhere in the parent chain.
    #[error("value not found for type {0}")]
    NotFound(&'static str),

    /// A value was found under the type's descriptor but holds another type.
    ///
    /// Only reachable through [`Injector::set`](crate::injector::Injector::set),
    /// which stores a value under a caller-chosen descriptor.
    #[error("value registered for {expected} holds a {found}")]
    Mismatch {
        /// The type that was requested.
        expected: &'static str,
        /// The type actually held by the registered value.
        found: &'static str,
    },
}
