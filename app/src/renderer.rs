use vox_render::{DrawCall, PointMesh, PointRenderer};

/// Stands in for a GPU backend: logs uploads and draw calls.
#[derive(Debug, Default)]
pub struct LogRenderer {
    uploaded: bool,
    draw_calls: u64,
}

impl LogRenderer {
    pub fn draw_calls(&self) -> u64 {
        self.draw_calls
    }
}

impl PointRenderer for LogRenderer {
    fn draw(&mut self, mesh: &PointMesh, call: &DrawCall) {
        if !self.uploaded {
            log::info!(
                "upload vertex buffer: {} vertices, {} bytes",
                mesh.vertex_count(),
                mesh.as_bytes().len()
            );
            self.uploaded = true;
        }
        self.draw_calls += 1;
        log::debug!(
            "draw #{}: {} points, cull={} depth={}, mvp={:?}",
            self.draw_calls,
            call.vertex_count,
            call.state.cull_faces,
            call.state.depth_test,
            call.mvp.to_cols_array()
        );
    }
}
