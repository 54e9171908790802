//! Shoreline library - procedural ocean and cyclone animations

pub mod cli;
pub mod clock;
pub mod cyclone;
pub mod geometry;
pub mod params;
pub mod pointer;
pub mod rendering;
pub mod scene;
pub mod wave;
