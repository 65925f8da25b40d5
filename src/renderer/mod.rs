//! wgpu rendering
//!
//! The hero backdrop is a single fullscreen pass shaded in the fragment stage.

pub mod backdrop_pipeline;

pub use backdrop_pipeline::BackdropRenderState;
