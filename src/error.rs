//! Error type shared by configuration, rendering and preview output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OceanError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid color '{0}': expected #rrggbb")]
    InvalidColor(String),

    #[error("GPU device error: {0}")]
    GpuDevice(String),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, OceanError>;
