use glam::Mat4;

use crate::camera::{CameraInput, FreeFlyCamera};
use crate::mesh::PointMesh;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub cull_faces: bool,
    pub depth_test: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            cull_faces: false,
            depth_test: true,
        }
    }
}

impl RenderState {
    pub fn toggle_cull_faces(&mut self) {
        self.cull_faces = !self.cull_faces;
    }

    pub fn toggle_depth_test(&mut self) {
        self.depth_test = !self.depth_test;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

impl Viewport {
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 1.0;
        }
        self.width as f32 / self.height as f32
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub camera: CameraInput,
    pub toggle_cull_faces: bool,
    pub toggle_depth_test: bool,
}

/// Everything a backend needs to draw the mesh once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub mvp: Mat4,
    pub vertex_count: usize,
    pub state: RenderState,
}

/// GPU side of the viewer: uploads the mesh on first sight and draws it.
pub trait PointRenderer {
    fn draw(&mut self, mesh: &PointMesh, call: &DrawCall);
}

/// Per-frame state for one loaded tile.
pub struct RenderSession {
    camera: FreeFlyCamera,
    state: RenderState,
    mesh: PointMesh,
    viewport: Viewport,
    frame_index: u64,
}

impl RenderSession {
    pub fn new(mesh: PointMesh, viewport: Viewport) -> Self {
        let camera = mesh
            .bounds()
            .map(FreeFlyCamera::framing)
            .unwrap_or_default();
        log::debug!("initial camera: {:?}", camera);

        Self {
            camera,
            state: RenderState::default(),
            mesh,
            viewport,
            frame_index: 0,
        }
    }

    pub fn camera(&self) -> &FreeFlyCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut FreeFlyCamera {
        &mut self.camera
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    pub fn mesh(&self) -> &PointMesh {
        &self.mesh
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport { width, height };
    }

    /// Applies `input`, then asks `renderer` to draw. Returns the draw call,
    /// or `None` when there is nothing to draw.
    pub fn frame<R>(&mut self, dt: f32, input: &FrameInput, renderer: &mut R) -> Option<DrawCall>
    where
        R: PointRenderer + ?Sized,
    {
        if input.toggle_cull_faces {
            self.state.toggle_cull_faces();
        }
        if input.toggle_depth_test {
            self.state.toggle_depth_test();
        }
        self.camera.apply(&input.camera, dt);
        self.frame_index += 1;

        if self.mesh.is_empty() {
            return None;
        }

        let call = DrawCall {
            mvp: self.camera.view_projection(self.viewport.aspect_ratio()),
            vertex_count: self.mesh.vertex_count(),
            state: self.state,
        };
        renderer.draw(&self.mesh, &call);
        Some(call)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vox_core::voxel::VoxelVertex;

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<DrawCall>,
    }

    impl PointRenderer for RecordingRenderer {
        fn draw(&mut self, mesh: &PointMesh, call: &DrawCall) {
            assert_eq!(mesh.vertex_count(), call.vertex_count);
            self.calls.push(*call);
        }
    }

    fn mesh() -> PointMesh {
        PointMesh::new(vec![
            VoxelVertex {
                position: [0.0, -5.0, 0.0],
                color: [0.0; 3],
            },
            VoxelVertex {
                position: [1.0, -5.0, 0.0],
                color: [1.0; 3],
            },
        ])
    }

    #[test]
    fn each_frame_issues_one_draw() {
        let mut session = RenderSession::new(mesh(), Viewport::default());
        let mut renderer = RecordingRenderer::default();
        for _ in 0..3 {
            session.frame(1.0 / 60.0, &FrameInput::default(), &mut renderer);
        }
        assert_eq!(renderer.calls.len(), 3);
        assert_eq!(session.frame_index(), 3);
        assert!(renderer.calls.iter().all(|c| c.vertex_count == 2));
    }

    #[test]
    fn toggles_flip_render_state() {
        let mut session = RenderSession::new(mesh(), Viewport::default());
        let mut renderer = RecordingRenderer::default();
        let input = FrameInput {
            toggle_cull_faces: true,
            toggle_depth_test: true,
            ..Default::default()
        };
        let call = session.frame(0.0, &input, &mut renderer).unwrap();
        assert!(call.state.cull_faces);
        assert!(!call.state.depth_test);

        let call = session.frame(0.0, &input, &mut renderer).unwrap();
        assert_eq!(call.state, RenderState::default());
    }

    #[test]
    fn camera_input_changes_the_mvp() {
        let mut session = RenderSession::new(mesh(), Viewport::default());
        let mut renderer = RecordingRenderer::default();
        let still = session
            .frame(0.1, &FrameInput::default(), &mut renderer)
            .unwrap();
        let input = FrameInput {
            camera: CameraInput {
                forward: 1.0,
                ..Default::default()
            },
            ..Default::default()
        };
        let moved = session.frame(0.1, &input, &mut renderer).unwrap();
        assert_ne!(still.mvp, moved.mvp);
    }

    #[test]
    fn empty_mesh_is_never_drawn() {
        let mut session = RenderSession::new(PointMesh::default(), Viewport::default());
        let mut renderer = RecordingRenderer::default();
        assert!(session
            .frame(0.1, &FrameInput::default(), &mut renderer)
            .is_none());
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn degenerate_viewport_keeps_a_finite_aspect() {
        let mut session = RenderSession::new(mesh(), Viewport::default());
        session.resize(640, 0);
        assert_eq!(session.viewport().aspect_ratio(), 1.0);
    }
}
