use std::ops::Range;

use crate::gfx::scene::object::{Object, Renderable};
use crate::gfx::scene::scene::Scene;

use super::pipeline::FlatColorPipeline;
use super::resources::RenderResources;

/// One `draw_indexed` call: which part, which draw range, which indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCall {
    pub part: usize,
    pub slot: usize,
    pub indices: Range<u32>,
}

/// Draw calls for the visible, non-empty ranges of `object`, in draw order.
pub fn draw_calls(object: &impl Renderable) -> Vec<DrawCall> {
    (0..object.part_count())
        .filter(|&part| object.is_part_visible(part))
        .flat_map(|part| {
            object
                .draw_ranges(part)
                .into_iter()
                .enumerate()
                .filter(|(_, range)| range.index_count > 0)
                .map(move |(slot, range)| DrawCall {
                    part,
                    slot,
                    indices: range.index_offset..range.index_offset + range.index_count,
                })
        })
        .collect()
}

pub trait DrawObject {
    fn draw_object(&mut self, object: &Object, resources: &RenderResources);
    fn draw_scene(&mut self, pipeline: &FlatColorPipeline, scene: &Scene, resources: &RenderResources);
}

impl DrawObject for wgpu::RenderPass<'_> {
    fn draw_object(&mut self, object: &Object, resources: &RenderResources) {
        let Some(gpu) = resources.get(object.id()) else {
            return; // not uploaded
        };

        let mut bound_part = None;
        for call in draw_calls(object) {
            let Some(Some(part)) = gpu.parts.get(call.part) else {
                continue;
            };
            let Some(slot) = part.slots.get(call.slot) else {
                continue;
            };

            if bound_part != Some(call.part) {
                self.set_vertex_buffer(0, part.vertex_buffer.slice(..));
                self.set_index_buffer(part.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                bound_part = Some(call.part);
            }
            self.set_bind_group(0, &slot.bind_group, &[]);
            self.draw_indexed(call.indices, 0, 0..1);
        }
    }

    fn draw_scene(&mut self, pipeline: &FlatColorPipeline, scene: &Scene, resources: &RenderResources) {
        self.set_pipeline(pipeline.pipeline());
        for object in scene.objects() {
            self.draw_object(object, resources);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::geometry::devices::{build_pc, PcSpec};

    #[test]
    fn test_one_call_per_face_of_visible_parts() {
        let mut pc = build_pc(&PcSpec::default(), 0);
        pc.initialize();

        let calls = draw_calls(&pc);
        let faces: usize = pc.parts.iter().map(|p| p.faces.len()).sum();
        assert_eq!(calls.len(), faces);
        // case faces are quads
        assert_eq!(calls[1].indices, 6..12);

        pc.set_part_visible("Case", false);
        assert_eq!(draw_calls(&pc).len(), faces - 6);
        assert!(draw_calls(&pc).iter().all(|c| c.part != 0));

        pc.visible = false;
        assert!(draw_calls(&pc).is_empty());
    }

    #[test]
    fn test_draw_calls_cover_index_buffer() {
        let mut pc = build_pc(&PcSpec::default(), 2);
        pc.initialize();
        for part in 0..pc.part_count() {
            let covered: u32 = draw_calls(&pc)
                .iter()
                .filter(|c| c.part == part)
                .map(|c| c.indices.end - c.indices.start)
                .sum();
            assert_eq!(covered as usize, pc.index_buffer(part).len());
        }
    }
}
