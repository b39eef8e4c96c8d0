use crate::render::{RenderCtx, RenderTarget};
use crate::shading::{
    FragmentVariant, ShadingParams, Uniforms, Vertex, SHADER_SOURCE, UNIFORMS_SIZE,
    VERTEX_ENTRY_POINT,
};

use super::common::{depth_stencil_state, premul_alpha_blend, primitive_state};
use super::{Geometry, LayerSet};

/// Draws a mesh as up to three layers sharing one vertex stage.
///
/// Pipelines are built lazily on first use and rebuilt when the surface format,
/// wireframe support or shading parameters change. The uniform block is one
/// buffer per renderer: draw at most one mesh per renderer per submission.
#[derive(Default)]
pub struct MeshRenderer {
    params: ShadingParams,

    pipeline_key: Option<PipelineKey>,
    pipelines: [Option<wgpu::RenderPipeline>; 3],

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    uniform_ubo: Option<wgpu::Buffer>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
struct PipelineKey {
    format: wgpu::TextureFormat,
    wireframe: bool,
    params: ShadingParams,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn params(&self) -> &ShadingParams {
        &self.params
    }

    /// Replaces the shading parameters. Pipelines are rebuilt on the next render.
    pub fn set_params(&mut self, params: ShadingParams) {
        self.params = params;
    }

    /// Renders `geometry` into `target`, one draw per layer in `layers`.
    ///
    /// Color and depth are loaded, not cleared; clearing is the frame's job.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        geometry: &Geometry,
        uniforms: &Uniforms,
        layers: LayerSet,
    ) {
        if geometry.is_empty() || layers.is_empty() {
            return;
        }

        self.ensure_pipelines(ctx);
        self.ensure_bindings(ctx);

        let Some(ubo) = self.uniform_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(uniforms));

        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("facet mesh pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                view: target.depth_view,
                depth_ops: Some(wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                }),
                stencil_ops: None,
            }),
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, geometry.vertices().slice(..));
        rpass.set_index_buffer(geometry.indices().slice(..), wgpu::IndexFormat::Uint32);

        for variant in layers.iter() {
            let Some(pipeline) = self.pipelines[variant.index()].as_ref() else { continue };
            rpass.set_pipeline(pipeline);
            rpass.draw_indexed(0..geometry.num_indices(), 0, 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        let key = PipelineKey {
            format: ctx.surface_format,
            wireframe: ctx.supports_wireframe(),
            params: self.params,
        };
        if self.pipeline_key == Some(key) && self.pipelines.iter().all(Option::is_some) {
            return;
        }

        log::debug!("building mesh pipelines for {:?}", key);

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("facet shading stage"),
            source: wgpu::ShaderSource::Wgsl(SHADER_SOURCE.into()),
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("facet uniforms bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: Some(UNIFORMS_SIZE),
                        },
                        count: None,
                    }],
                });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("facet mesh pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let constants = key.params.pipeline_constants();

        self.pipelines = FragmentVariant::ALL.map(|variant| {
            // Only `frag_model` reads the light.
            let fragment_constants: &[(&str, f64)] = match variant {
                FragmentVariant::Model => &constants,
                FragmentVariant::Face | FragmentVariant::Mesh => &[],
            };

            Some(ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(variant.label()),
                layout: Some(&pipeline_layout),

                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some(VERTEX_ENTRY_POINT),
                    compilation_options: Default::default(),
                    buffers: &[Vertex::layout()],
                },

                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some(variant.entry_point()),
                    compilation_options: wgpu::PipelineCompilationOptions {
                        constants: fragment_constants,
                        ..Default::default()
                    },
                    targets: &[Some(wgpu::ColorTargetState {
                        format: key.format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),

                primitive: primitive_state(variant, key.wireframe),
                depth_stencil: Some(depth_stencil_state(variant)),
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            }))
        });

        self.pipeline_key = Some(key);
        self.bind_group_layout = Some(bind_group_layout);

        // Bind group belongs to the old layout.
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.uniform_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let ubo = match self.uniform_ubo.take() {
            Some(ubo) => ubo,
            None => ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("facet uniforms ubo"),
                size: UNIFORMS_SIZE.get(),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
        };

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("facet uniforms bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: ubo.as_entire_binding(),
            }],
        });

        self.uniform_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }
}
