//! Uniform layouts for transform matrices.
//!
//! The builders return glam matrices. This module fixes how those matrices
//! reach a shader:
//!
//! - [`Mat3Uniform`] matches a WGSL `mat3x3<f32>` uniform: three columns, each
//!   padded to 16 bytes (48 bytes total). [`Mat3Uniform::to_flat`] drops the
//!   padding and yields the 9 floats an untransposed `uniformMatrix3fv` expects.
//! - [`Mat4Uniform`] matches `mat4x4<f32>` (64 bytes, no padding).
//!   [`Mat4Uniform::to_flat`] yields the 16-float `uniformMatrix4fv` payload.
//!
//! Both are column-major. [`TransformBuffer`] owns a wgpu uniform buffer for
//! either layout.
//!
//! # WGSL Declaration
//!
//! ```wgsl
//! @group(0) @binding(0) var<uniform> transform: mat3x3<f32>; // Mat3Uniform
//! @group(0) @binding(0) var<uniform> transform: mat4x4<f32>; // Mat4Uniform
//! ```

use glam::{Mat3, Mat4, Vec3};

/// A 3×3 matrix laid out for a WGSL uniform.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat3Uniform {
    /// Columns as `[x, y, z, padding]`.
    pub cols: [[f32; 4]; 3],
}

impl From<Mat3> for Mat3Uniform {
    fn from(m: Mat3) -> Self {
        let [c0, c1, c2] = m.to_cols_array_2d();
        Self {
            cols: [
                [c0[0], c0[1], c0[2], 0.0],
                [c1[0], c1[1], c1[2], 0.0],
                [c2[0], c2[1], c2[2], 0.0],
            ],
        }
    }
}

impl Mat3Uniform {
    /// The 9 column-major floats without padding.
    pub fn to_flat(&self) -> [f32; 9] {
        let [c0, c1, c2] = self.cols;
        [
            c0[0], c0[1], c0[2], c1[0], c1[1], c1[2], c2[0], c2[1], c2[2],
        ]
    }

    pub fn to_mat3(&self) -> Mat3 {
        let [c0, c1, c2] = self.cols;
        Mat3::from_cols(
            Vec3::new(c0[0], c0[1], c0[2]),
            Vec3::new(c1[0], c1[1], c1[2]),
            Vec3::new(c2[0], c2[1], c2[2]),
        )
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a uniform back from bytes. Returns `None` if the length is wrong.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }
}

/// A 4×4 matrix laid out for a WGSL uniform.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Mat4Uniform {
    pub cols: [[f32; 4]; 4],
}

impl From<Mat4> for Mat4Uniform {
    fn from(m: Mat4) -> Self {
        Self {
            cols: m.to_cols_array_2d(),
        }
    }
}

impl Mat4Uniform {
    /// The 16 column-major floats.
    pub fn to_flat(&self) -> [f32; 16] {
        bytemuck::cast(self.cols)
    }

    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.cols)
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reads a uniform back from bytes. Returns `None` if the length is wrong.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        bytemuck::try_pod_read_unaligned(bytes).ok()
    }
}

/// A GPU uniform buffer holding one transform.
///
/// The buffer is created once and rewritten whenever a new matrix is built.
///
/// # Example
///
/// ```ignore
/// let buffer = TransformBuffer::<Mat4Uniform>::new(&gpu.device, "Cube Transform");
/// buffer.write(&gpu.queue, &build_transform_3d(&params, &scene, clock.now_ms()).into());
/// ```
pub struct TransformBuffer<U> {
    buffer: wgpu::Buffer,
    _layout: std::marker::PhantomData<U>,
}

impl<U: bytemuck::Pod> TransformBuffer<U> {
    /// Size of the uniform in bytes.
    pub const SIZE: u64 = std::mem::size_of::<U>() as u64;

    pub fn new(device: &wgpu::Device, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: Self::SIZE,
            usage: wgpu::BufferUsages::UNIFORM
                | wgpu::BufferUsages::COPY_DST
                | wgpu::BufferUsages::COPY_SRC,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            _layout: std::marker::PhantomData,
        }
    }

    /// Queue an upload of `value` into the buffer.
    pub fn write(&self, queue: &wgpu::Queue, value: &U) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(value));
    }

    /// Layout entry for binding this buffer to the vertex stage.
    pub fn layout_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
        wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: wgpu::BufferSize::new(Self::SIZE),
            },
            count: None,
        }
    }

    pub fn bind_group_entry(&self, binding: u32) -> wgpu::BindGroupEntry<'_> {
        wgpu::BindGroupEntry {
            binding,
            resource: self.buffer.as_entire_binding(),
        }
    }

    /// The underlying buffer, usable as a copy source for readback.
    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }
}
