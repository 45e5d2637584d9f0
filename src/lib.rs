//! Tidewater library - animated simplex-noise ocean plane

pub mod camera;
pub mod cli;
pub mod error;
pub mod noise;
pub mod ocean;
pub mod params;
pub mod preview;
pub mod rendering;

pub use error::{OceanError, Result};
