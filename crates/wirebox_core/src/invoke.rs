//! Function invocation with injected arguments.
//!
//! [`Invocable`] is implemented for every `FnOnce` whose parameters all
//! implement [`Param`], up to sixteen parameters. Passing anything that is not
//! callable to [`Injector::invoke`] does not compile.
//!
//! All arguments are resolved, left to right, before the function is called.
//! If any argument is missing the function is not called at all.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use wirebox_core::injector::Injector;
//!
//! struct Width(u32);
//! struct Height(u32);
//!
//! let injector = Injector::new().with(Width(3)).with(Height(4));
//!
//! let area = injector
//!     .invoke(|w: Arc<Width>, h: Arc<Height>| w.0 * h.0)
//!     .unwrap();
//! assert_eq!(area, 12);
//! ```
//!
//! Functions returning several values return a tuple, and async functions
//! return their future, which the caller awaits:
//!
//! ```
//! # use std::sync::Arc;
//! # use wirebox_core::injector::Injector;
//! # struct Width(u32);
//! async fn double(width: Arc<Width>) -> u32 {
//!     width.0 * 2
//! }
//!
//! # async fn run() {
//! let injector = Injector::new().with(Width(21));
//! let doubled = injector.invoke(double).unwrap().await;
//! assert_eq!(doubled, 42);
//! # }
//! ```

use variadics_please::all_tuples;

use crate::error::InjectError;
use crate::injector::Injector;
use crate::param::Param;

/// A callable whose arguments can be supplied by an [`Injector`].
///
/// The `Params` type parameter is the tuple of argument types. It only exists
/// so that one function type can be matched against the implementation for
/// its own arity.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be invoked with injected arguments",
    label = "expected a function whose parameters all implement `Param`"
)]
pub trait Invocable<Params>: Sized {
    /// The callable's return type.
    type Output;

    /// Resolves every argument and calls `self`.
    ///
    /// # Errors
    ///
    /// Returns [`InjectError`] for the first argument that cannot be
    /// resolved. The callable is not called in that case.
    fn invoke(self, injector: &Injector<'_>) -> Result<Self::Output, InjectError>;
}

macro_rules! impl_invocable {
    ($(($param:ident, $arg:ident)),*) => {
        impl<Func, Ret, $($param: Param),*> Invocable<($($param,)*)> for Func
        where
            Func: FnOnce($($param),*) -> Ret,
        {
            type Output = Ret;

            fn invoke(self, injector: &Injector<'_>) -> Result<Ret, InjectError> {
                let ($($arg,)*) = <($($param,)*) as Param>::fetch(injector)?;
                Ok(self($($arg),*))
            }
        }
    };
}

all_tuples!(impl_invocable, 0, 16, P, p);

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::sync::Arc;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct Counter {
        count: i32,
    }

    #[derive(Debug, PartialEq)]
    struct Config {
        multiplier: i32,
    }

    #[test]
    fn zero_param_function() {
        fn produce() -> i32 {
            42
        }

        let injector = Injector::new();
        assert_eq!(injector.invoke(produce).unwrap(), 42);
    }

    #[test]
    fn single_param_closure() {
        let injector = Injector::new().with(Counter { count: 10 });
        let result = injector.invoke(|counter: Arc<Counter>| counter.count);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    fn multi_param_function() {
        fn compute(counter: Arc<Counter>, config: Arc<Config>) -> i32 {
            counter.count * config.multiplier
        }

        let injector = Injector::new()
            .with(Counter { count: 5 })
            .with(Config { multiplier: 3 });
        assert_eq!(injector.invoke(compute).unwrap(), 15);
    }

    #[test]
    fn tuple_return_keeps_order() {
        let injector = Injector::new()
            .with(Counter { count: 2 })
            .with(Config { multiplier: 7 });

        let (first, second, third) = injector
            .invoke(|config: Arc<Config>, counter: Arc<Counter>| {
                (config.multiplier, counter.count, "done")
            })
            .unwrap();
        assert_eq!((first, second, third), (7, 2, "done"));
    }

    #[test]
    fn missing_argument_skips_call() {
        let called = Cell::new(false);
        let injector = Injector::new().with(Counter { count: 1 });

        let result = injector.invoke(|_counter: Arc<Counter>, _config: Arc<Config>| {
            called.set(true);
        });

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Config"));
        assert!(!called.get());
    }

    #[test]
    fn fn_once_closures_are_accepted() {
        let owned = String::from("moved");
        let injector = Injector::new().with(Counter { count: 3 });

        let result = injector
            .invoke(move |counter: Arc<Counter>| format!("{owned}-{}", counter.count))
            .unwrap();
        assert_eq!(result, "moved-3");
    }

    #[test]
    fn many_params() {
        struct A(u8);
        struct B(u8);
        struct C(u8);
        struct D(u8);
        struct E(u8);

        let injector = Injector::new()
            .with(A(1))
            .with(B(2))
            .with(C(3))
            .with(D(4))
            .with(E(5));

        let sum = injector
            .invoke(
                |a: Arc<A>, b: Arc<B>, c: Arc<C>, d: Arc<D>, e: Arc<E>| {
                    a.0 + b.0 + c.0 + d.0 + e.0
                },
            )
            .unwrap();
        assert_eq!(sum, 15);
    }

    #[tokio::test]
    async fn async_function_returns_future() {
        async fn scaled(counter: Arc<Counter>, config: Arc<Config>) -> i32 {
            counter.count * config.multiplier
        }

        let injector = Injector::new()
            .with(Counter { count: 6 })
            .with(Config { multiplier: 7 });

        let future = injector.invoke(scaled).unwrap();
        assert_eq!(future.await, 42);
    }
}
