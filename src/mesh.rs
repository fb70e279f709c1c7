use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    pub const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3,
        1 => Float32x3,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// One unit sphere serves every body; per-body radius is applied as instance
/// scale.
pub fn generate_uv_sphere(
    lat_segments: u32,
    lon_segments: u32,
    radius: f32,
) -> (Vec<Vertex>, Vec<u32>) {
    let mut vertices = Vec::new();
    let mut indices = Vec::new();

    for y in 0..=lat_segments {
        let theta = std::f32::consts::PI * (y as f32) / (lat_segments as f32);
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for x in 0..=lon_segments {
            let phi = 2.0 * std::f32::consts::PI * (x as f32) / (lon_segments as f32);
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            // Negated so the index pattern below winds counter-clockwise
            // when seen from outside the sphere.
            let nx = cos_phi * sin_theta;
            let ny = -cos_theta;
            let nz = sin_phi * sin_theta;

            vertices.push(Vertex {
                position: [nx * radius, ny * radius, nz * radius],
                normal: [nx, ny, nz],
            });
        }
    }

    for y in 0..lat_segments {
        for x in 0..lon_segments {
            let i0 = y * (lon_segments + 1) + x;
            let i1 = i0 + lon_segments + 1;

            indices.extend_from_slice(&[i0, i1, i0 + 1, i1, i1 + 1, i0 + 1]);
        }
    }

    (vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_vertices_lie_on_the_radius() {
        let (vertices, indices) = generate_uv_sphere(16, 16, 1.0);
        assert_eq!(vertices.len(), 17 * 17);
        assert_eq!(indices.len() as u32, 16 * 16 * 6);
        for v in &vertices {
            let len = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-4, "vertex off the sphere: {len}");
        }
    }

    #[test]
    fn sphere_indices_stay_in_range() {
        let (vertices, indices) = generate_uv_sphere(8, 12, 2.0);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }
}
