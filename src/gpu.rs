//! Headless GPU access for uploading transform uniforms.
//!
//! [`GpuContext::headless`] acquires a device and queue without a window or
//! surface. Failure is returned as a [`GpuError`] so the caller can end the
//! render session and keep the process alive.
//!
//! # Example
//!
//! ```no_run
//! use uniforma::{GpuContext, Mat4Uniform, TransformBuffer};
//!
//! match GpuContext::headless() {
//!     Ok(gpu) => {
//!         let buffer = TransformBuffer::<Mat4Uniform>::new(&gpu.device, "Transform");
//!         buffer.write(&gpu.queue, &uniforma::Mat4::IDENTITY.into());
//!     }
//!     Err(e) => log::error!("{e}"),
//! }
//! ```

use std::fmt;

/// Errors that can occur while acquiring a GPU.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GpuError {
    /// No adapter matched the request.
    NoAdapter(String),
    /// The adapter refused to create a device.
    RequestDevice(String),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::NoAdapter(msg) => write!(f, "No suitable GPU adapter: {}", msg),
            GpuError::RequestDevice(msg) => write!(f, "Failed to create device: {}", msg),
        }
    }
}

impl std::error::Error for GpuError {}

/// Device and queue used to create and fill uniform buffers.
pub struct GpuContext {
    /// The logical GPU device for creating resources.
    pub device: wgpu::Device,
    /// The command queue for uploads.
    pub queue: wgpu::Queue,
    /// Name of the adapter backing the device.
    pub adapter_name: String,
}

impl GpuContext {
    /// Create a GPU context with no presentation surface.
    ///
    /// Blocks on adapter and device requests.
    pub fn headless() -> Result<Self, GpuError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        }))
        .map_err(|e| GpuError::NoAdapter(e.to_string()))?;

        let adapter_name = adapter.get_info().name;
        log::info!("using adapter '{adapter_name}'");

        let (device, queue) = pollster::block_on(adapter.request_device(&wgpu::DeviceDescriptor {
            label: Some("Uniforma Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: Default::default(),
            trace: Default::default(),
            experimental_features: Default::default(),
        }))
        .map_err(|e| GpuError::RequestDevice(e.to_string()))?;

        Ok(Self {
            device,
            queue,
            adapter_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_describe_the_failed_step() {
        assert_eq!(
            GpuError::NoAdapter("none found".into()).to_string(),
            "No suitable GPU adapter: none found"
        );
        assert_eq!(
            GpuError::RequestDevice("limits".into()).to_string(),
            "Failed to create device: limits"
        );
    }
}
