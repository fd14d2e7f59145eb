//! Optional adapters for external math libraries.
//!
//! Enable feature flags (`nalgebra`, `glam`) to add `From` conversions in both
//! directions between this crate's vectors and the library's vector types.
//! The adapters only go through the public constructors and accessors, so no
//! foreign type ever appears in the core API.

#[cfg(feature = "glam")]
pub mod glam;
#[cfg(feature = "nalgebra")]
pub mod nalgebra;
