//! A helper library for `cgmath`.
//!
//! Provides 2D homogeneous transformations on top of `cgmath::Matrix3`.
pub extern crate cgmath;

mod twodim;

pub use self::twodim::*;

/// The prelude.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Matrix3TwoDimExt;
}
