//! WebGPU rendering module
//!
//! Presents frames composited by [`crate::canvas::FrameCanvas`].

pub mod pipeline;

pub use pipeline::FrameRenderState;
