use bytemuck::{Pod, Zeroable};

const SECTORS: u32 = 16;
const STACKS: u32 = 12;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SphereVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl SphereVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0=>Float32x3, 1=>Float32x3];

    pub fn layout<'a>() -> wgpu::VertexBufferLayout<'a> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<SphereVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// A low-poly unit sphere, instanced for every cell in the scene.
pub fn sphere_mesh() -> (Vec<SphereVertex>, Vec<u32>) {
    use std::f32::consts::PI;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for stack in 0..=STACKS {
        let stack_angle = PI * (stack as f32) / (STACKS as f32);
        let ring = stack_angle.sin();
        let y = stack_angle.cos();

        for sector in 0..=SECTORS {
            let sector_angle = 2.0 * PI * (sector as f32) / (SECTORS as f32);
            let x = ring * sector_angle.cos();
            let z = ring * sector_angle.sin();
            // Unit radius, so the position doubles as the normal
            vertices.push(SphereVertex {
                position: [x, y, z],
                normal: [x, y, z],
            });
        }
    }

    for stack in 0..STACKS {
        let ring_start = stack * (SECTORS + 1);
        let next_ring_start = ring_start + SECTORS + 1;

        for sector in 0..SECTORS {
            if stack != 0 {
                indices.push(ring_start + sector);
                indices.push(next_ring_start + sector);
                indices.push(ring_start + sector + 1);
            }
            if stack != STACKS - 1 {
                indices.push(ring_start + sector + 1);
                indices.push(next_ring_start + sector);
                indices.push(next_ring_start + sector + 1);
            }
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_is_well_formed() {
        let (vertices, indices) = sphere_mesh();
        assert_eq!(vertices.len() as u32, (STACKS + 1) * (SECTORS + 1));
        assert_eq!(indices.len() % 3, 0);
        for index in &indices {
            assert!((*index as usize) < vertices.len());
        }
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let (vertices, _) = sphere_mesh();
        for vertex in vertices {
            let [x, y, z] = vertex.position;
            let radius = (x * x + y * y + z * z).sqrt();
            assert!((radius - 1.0).abs() < 1e-5);
        }
    }
}
