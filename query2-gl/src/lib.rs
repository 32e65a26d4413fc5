//! OpenGL backend.
//!
//! This crate exports an [OpenGL](https://www.khronos.org/opengl/) backend for `query2`. The
//! backend type, [`GL43`], answers `glGetInternalformat*v` calls through the currently bound
//! context; creating and binding that context is left to the windowing crate (`query2-glfw`).
//!
//! The entry points must have been loaded (`gl::load_with`) before a backend is created.

pub mod gl43;

pub use gl43::GL43;
