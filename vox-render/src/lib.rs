//! CPU side of the point renderer.
//!
//! Turns a voxel vertex list into an upload-ready buffer and owns the
//! per-frame state (camera, render toggles, viewport). Issuing the actual GPU
//! work is left to a [`PointRenderer`] implementation.

pub mod camera;
pub mod mesh;
pub mod session;

pub use camera::{CameraInput, FreeFlyCamera};
pub use mesh::{Bounds, GpuVertex, PointMesh};
pub use session::{DrawCall, FrameInput, PointRenderer, RenderSession, RenderState, Viewport};
