use glam::Vec2;

use crate::core::LineSegment;

/// Vertex of a tessellated line, as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Expand NDC line segments into a triangle list
///
/// Each segment becomes a quad (two triangles) whose thickness is the
/// segment width in pixels of a `viewport`-sized target. Zero-length
/// segments produce nothing.
pub fn tessellate(segments: &[LineSegment], viewport: Vec2) -> Vec<LineVertex> {
    let pixels_per_unit = viewport * 0.5;
    let mut vertices = Vec::with_capacity(segments.len() * 6);

    for segment in segments {
        let delta = (segment.to - segment.from) * pixels_per_unit;
        let length = delta.length();
        if length <= f32::EPSILON {
            continue;
        }

        let normal = Vec2::new(-delta.y, delta.x) / length * (segment.width * 0.5);
        let offset = normal / pixels_per_unit;
        let corners = [
            segment.from + offset,
            segment.from - offset,
            segment.to + offset,
            segment.to - offset,
        ];

        let color = segment.color.to_array();
        for index in [0, 1, 2, 2, 1, 3] {
            vertices.push(LineVertex {
                position: corners[index].to_array(),
                color,
            });
        }
    }

    vertices
}
