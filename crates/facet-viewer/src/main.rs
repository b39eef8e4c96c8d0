//! Interactive viewer for the geometry-shaded mesh stage.
//!
//! Left-drag orbits, the wheel zooms, `1`/`2`/`3` toggle the silhouette,
//! shaded model and overlay layers, `L` swings the light around, `Home`
//! reframes, `Esc` quits.

mod scene;

use anyhow::{Context, Result};
use glam::{Mat4, Quat};

use facet_engine::camera::Camera;
use facet_engine::color::Rgba;
use facet_engine::core::{App, AppControl, FrameCtx};
use facet_engine::device::GpuInit;
use facet_engine::geometry::{MeshData, TriMesh};
use facet_engine::input::{InputFrame, InputState, Key, MouseButton};
use facet_engine::logging::{init_logging, LoggingConfig};
use facet_engine::render::{Geometry, LayerSet, MeshRenderer};
use facet_engine::shading::{FragmentVariant, ShadingParams, Uniforms, DEFAULT_LIGHT_DIRECTION};
use facet_engine::window::{Runtime, RuntimeConfig};

const CLEAR_COLOR: Rgba = Rgba::new(0.11, 0.12, 0.14, 1.0);

/// Light rotation per `L` press, about the view-space Y axis.
const LIGHT_STEP: f32 = std::f32::consts::FRAC_PI_6;

struct Viewer {
    mesh: TriMesh,
    data: MeshData,

    camera: Camera,
    layers: LayerSet,
    /// Left button went down inside the window and has not been released.
    dragging: bool,
    /// Light yaw in view space, in `LIGHT_STEP` increments.
    light_steps: u32,

    renderer: MeshRenderer,
    /// Uploaded on the first frame, once a device exists.
    geometry: Option<Geometry>,
}

impl Viewer {
    fn new(mesh: TriMesh) -> Result<Self> {
        let data = MeshData::from_tri_mesh(&mesh).context("failed to build vertex data")?;
        log::info!(
            "loaded mesh: {} triangles, {} indices",
            mesh.len(),
            data.num_indices()
        );

        let mut viewer = Self {
            mesh,
            data,
            camera: Camera::default(),
            layers: LayerSet::default(),
            dragging: false,
            light_steps: 0,
            renderer: MeshRenderer::new(),
            geometry: None,
        };
        viewer.reframe();
        Ok(viewer)
    }

    fn reframe(&mut self) {
        if let Some((min, max)) = self.mesh.bounds() {
            self.camera.frame_bounds(min, max);
        }
    }

    /// Applies this frame's input. Returns `AppControl::Exit` on `Esc`.
    fn handle_input(&mut self, input: &InputState, frame: &InputFrame) -> AppControl {
        if frame.key_pressed(Key::Escape) {
            return AppControl::Exit;
        }

        if frame.key_pressed(Key::Home) {
            self.reframe();
        }

        for (digit, variant) in [
            (1, FragmentVariant::Face),
            (2, FragmentVariant::Model),
            (3, FragmentVariant::Mesh),
        ] {
            if frame.key_pressed(Key::Digit(digit)) {
                let enabled = self.layers.toggle(variant);
                log::info!("{variant:?} layer {}", if enabled { "on" } else { "off" });
            }
        }

        if frame.key_pressed(Key::Letter('L')) {
            self.step_light();
        }

        if frame.buttons_pressed.contains(&MouseButton::Left) {
            self.dragging = true;
        }
        if frame.buttons_released.contains(&MouseButton::Left)
            || !input.button_down(MouseButton::Left)
        {
            self.dragging = false;
        }
        if self.dragging {
            let (dx, dy) = frame.pointer_delta;
            self.camera.rotate(dx, dy);
        }

        if frame.wheel_lines != 0.0 {
            self.camera.zoom(frame.wheel_lines);
        }

        AppControl::Continue
    }

    /// Rotates the light one step; the renderer rebuilds its pipelines.
    fn step_light(&mut self) {
        self.light_steps = (self.light_steps + 1) % 12;
        let rotation = Quat::from_rotation_y(self.light_steps as f32 * LIGHT_STEP);
        let light_direction = rotation * DEFAULT_LIGHT_DIRECTION;
        log::info!("light direction {light_direction}");
        self.renderer.set_params(ShadingParams { light_direction });
    }
}

impl App for Viewer {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.handle_input(ctx.input, ctx.input_frame) == AppControl::Exit {
            return AppControl::Exit;
        }

        let Self {
            data,
            camera,
            layers,
            renderer,
            geometry,
            ..
        } = self;

        ctx.render(CLEAR_COLOR, |rctx, target| {
            let geometry = geometry.get_or_insert_with(|| Geometry::new(rctx.device, data));
            let uniforms = Uniforms::from_camera(camera, rctx.viewport.aspect(), Mat4::IDENTITY);
            renderer.render(rctx, target, geometry, &uniforms, *layers);
        })
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let viewer = Viewer::new(scene::demo_mesh())?;

    Runtime::run(
        RuntimeConfig {
            title: "facet viewer".to_string(),
            ..RuntimeConfig::default()
        },
        GpuInit::default(),
        viewer,
    )
}
