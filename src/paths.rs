//! The concrete paths.

/// Seals a path type and gives it the `Class{...}` display form.
/// The type must store its [PathState](crate::PathState) in a field named `state`.
macro_rules! path_boilerplate {
    ($ty:ident) => {
        impl crate::path::Sealed for $ty {}

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.state.fmt_with_class(stringify!($ty), f)
            }
        }
    };
}

/// The `class_name`, `state` and `state_mut` methods of [ParametricPath](crate::ParametricPath).
macro_rules! path_state_accessors {
    ($ty:ident) => {
        fn class_name(&self) -> &'static str {
            stringify!($ty)
        }

        fn state(&self) -> &crate::PathState {
            &self.state
        }

        fn state_mut(&mut self) -> &mut crate::PathState {
            &mut self.state
        }
    };
}

pub use circle::CirclePath;
pub use custom::CustomPath;
pub use flat::FlatPath;
pub use hump::HumpPath;
pub use lemniscate::LemniscatePath;
pub use spline::SplinePath;

mod circle;
mod custom;
mod flat;
mod hump;
mod lemniscate;
mod spline;
