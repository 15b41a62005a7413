//! GPU resources for scene objects, kept outside the objects themselves.

use std::collections::HashMap;
use std::ops::Range;

use cgmath::Matrix4;
use wgpu::{Buffer, Device, Queue};

use crate::gfx::scene::object::{Object, ObjectId, Renderable};

use super::pipeline::FlatColorPipeline;
use super::uniforms::DrawUniform;

/// Uniform buffer and bind group for one draw range.
pub struct DrawSlot {
    pub uniform_buffer: Buffer,
    pub bind_group: wgpu::BindGroup,
    pub indices: Range<u32>,
}

pub struct PartGpuResources {
    pub vertex_buffer: Buffer,
    pub index_buffer: Buffer,
    pub slots: Vec<DrawSlot>,
}

/// One entry per part; `None` for parts with nothing to draw.
pub struct ObjectGpuResources {
    pub parts: Vec<Option<PartGpuResources>>,
}

impl ObjectGpuResources {
    fn destroy(self) {
        for part in self.parts.into_iter().flatten() {
            part.vertex_buffer.destroy();
            part.index_buffer.destroy();
            for slot in part.slots {
                slot.uniform_buffer.destroy();
            }
        }
    }
}

/// Table of per-object GPU resources keyed by [`ObjectId`].
///
/// Creation uploads the object's current buffers. Geometry edits need a
/// `destroy` + `create` cycle; transforms and colors only need `update`.
#[derive(Default)]
pub struct RenderResources {
    objects: HashMap<ObjectId, ObjectGpuResources>,
}

impl RenderResources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uploads `object`, replacing any resources it already had.
    pub fn create(&mut self, device: &Device, pipeline: &FlatColorPipeline, object: &Object) {
        use wgpu::util::DeviceExt;

        let parts = (0..object.part_count())
            .map(|i| {
                let indices = object.index_buffer(i);
                if indices.is_empty() {
                    return None;
                }

                let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Part Vertex Buffer"),
                    contents: bytemuck::cast_slice(object.vertex_buffer(i)),
                    usage: wgpu::BufferUsages::VERTEX,
                });
                let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some("Part Index Buffer"),
                    contents: bytemuck::cast_slice(indices),
                    usage: wgpu::BufferUsages::INDEX,
                });

                let slots = object
                    .draw_ranges(i)
                    .iter()
                    .map(|range| {
                        let uniform_buffer =
                            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                                label: Some("Draw Uniform Buffer"),
                                contents: bytemuck::cast_slice(&[DrawUniform::default()]),
                                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                            });
                        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
                            label: Some("Draw Uniform Bind Group"),
                            layout: pipeline.bind_group_layout(),
                            entries: &[wgpu::BindGroupEntry {
                                binding: 0,
                                resource: uniform_buffer.as_entire_binding(),
                            }],
                        });
                        DrawSlot {
                            uniform_buffer,
                            bind_group,
                            indices: range.index_offset..range.index_offset + range.index_count,
                        }
                    })
                    .collect();

                Some(PartGpuResources {
                    vertex_buffer,
                    index_buffer,
                    slots,
                })
            })
            .collect();

        if let Some(previous) = self.objects.insert(object.id(), ObjectGpuResources { parts }) {
            previous.destroy();
        }
        log::debug!("Uploaded GPU resources for '{}' ({})", object.name, object.id());
    }

    /// Releases the resources of `id`. Returns false when there were none.
    pub fn destroy(&mut self, id: ObjectId) -> bool {
        match self.objects.remove(&id) {
            Some(resources) => {
                resources.destroy();
                true
            }
            None => false,
        }
    }

    /// Writes the current matrices and colors of `object` into its uniforms.
    pub fn update(&self, queue: &Queue, object: &Object, view_proj: Matrix4<f32>) {
        let Some(resources) = self.objects.get(&object.id()) else {
            return;
        };

        for (i, part) in resources.parts.iter().enumerate() {
            let Some(part) = part else { continue };
            let mvp = view_proj * object.part_matrix(i);
            for (slot, range) in part.slots.iter().zip(object.draw_ranges(i)) {
                let uniform = DrawUniform::new(mvp, range.color);
                queue.write_buffer(&slot.uniform_buffer, 0, bytemuck::cast_slice(&[uniform]));
            }
        }
    }

    pub fn get(&self, id: ObjectId) -> Option<&ObjectGpuResources> {
        self.objects.get(&id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Releases everything.
    pub fn clear(&mut self) {
        for (_, resources) in self.objects.drain() {
            resources.destroy();
        }
    }
}

impl Drop for RenderResources {
    fn drop(&mut self) {
        self.clear();
    }
}
