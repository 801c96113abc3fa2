use portal_core::{
    BakedTexture, Camera, Color, FireflyField, NodeName, SceneError, SceneModel, ShadingParams,
    LAMP_LIGHT_COLOR, NAILS_COLOR,
};
use web_sys as web;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FlatUniforms {
    view_proj: [[f32; 4]; 4],
    color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PortalUniforms {
    view_proj: [[f32; 4]; 4],
    color_start: [f32; 4],
    color_end: [f32; 4],
    time: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FireflyUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    resolution: [f32; 2],
    time: f32,
    size: f32,
    pixel_ratio: f32,
    _pad: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MeshVertex {
    position: [f32; 3],
    uv: [f32; 2],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FireflyInstance {
    position: [f32; 3],
    scale: f32,
}

struct MeshBuffers {
    vertex: wgpu::Buffer,
    index: wgpu::Buffer,
    index_count: u32,
}

/// GPU-side resources for the loaded model; absent until the async load lands.
struct SceneBuffers {
    baked: MeshBuffers,
    portal: MeshBuffers,
    lamp_lights: MeshBuffers,
    fences_nails: MeshBuffers,
    baked_bind_group: wgpu::BindGroup,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth_view: wgpu::TextureView,

    baked_pipeline: wgpu::RenderPipeline,
    flat_pipeline: wgpu::RenderPipeline,
    portal_pipeline: wgpu::RenderPipeline,
    fireflies_pipeline: wgpu::RenderPipeline,

    scene_uniform_buffer: wgpu::Buffer,
    scene_bind_group: wgpu::BindGroup,
    texture_bgl: wgpu::BindGroupLayout,
    linear_sampler: wgpu::Sampler,

    lamp_uniform_buffer: wgpu::Buffer,
    lamp_bind_group: wgpu::BindGroup,
    nails_uniform_buffer: wgpu::Buffer,
    nails_bind_group: wgpu::BindGroup,
    lamp_color: Color,
    nails_color: Color,

    portal_uniform_buffer: wgpu::Buffer,
    portal_bind_group: wgpu::BindGroup,

    firefly_uniform_buffer: wgpu::Buffer,
    firefly_bind_group: wgpu::BindGroup,
    quad_vb: wgpu::Buffer,
    firefly_instance_vb: wgpu::Buffer,
    firefly_count: u32,

    scene: Option<SceneBuffers>,

    width: u32,
    height: u32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        field: &FireflyField,
    ) -> anyhow::Result<Self> {
        let width = canvas.width();
        let height = canvas.height();

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .unwrap_or(caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let depth_view = create_depth_view(&device, width, height);

        // Shader modules
        let baked_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("baked_shader"),
            source: wgpu::ShaderSource::Wgsl(portal_core::BAKED_WGSL.into()),
        });
        let flat_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("flat_shader"),
            source: wgpu::ShaderSource::Wgsl(portal_core::FLAT_WGSL.into()),
        });
        let portal_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("portal_shader"),
            source: wgpu::ShaderSource::Wgsl(portal_core::PORTAL_WGSL.into()),
        });
        let fireflies_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("fireflies_shader"),
            source: wgpu::ShaderSource::Wgsl(portal_core::FIREFLIES_WGSL.into()),
        });

        let uniform_bgl_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        };

        let uniform_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bgl"),
            entries: &[uniform_bgl_entry(0)],
        });
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        // Uniform buffers and bind groups
        let scene_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let lamp_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("lamp_uniforms"),
            size: std::mem::size_of::<FlatUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let nails_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("nails_uniforms"),
            size: std::mem::size_of::<FlatUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let portal_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("portal_uniforms"),
            size: std::mem::size_of::<PortalUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let firefly_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("firefly_uniforms"),
            size: std::mem::size_of::<FireflyUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let uniform_bg = |label: &str, buffer: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &uniform_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            })
        };
        let scene_bind_group = uniform_bg("scene_bg", &scene_uniform_buffer);
        let lamp_bind_group = uniform_bg("lamp_bg", &lamp_uniform_buffer);
        let nails_bind_group = uniform_bg("nails_bg", &nails_uniform_buffer);
        let portal_bind_group = uniform_bg("portal_bg", &portal_uniform_buffer);
        let firefly_bind_group = uniform_bg("firefly_bg", &firefly_uniform_buffer);

        // Firefly geometry: one shared quad, one instance per particle.
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instances: Vec<FireflyInstance> = field
            .iter()
            .map(|f| FireflyInstance {
                position: f.position.to_array(),
                scale: f.scale,
            })
            .collect();
        let firefly_instance_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("firefly_instance_vb"),
            contents: bytemuck::cast_slice(&instances),
            usage: wgpu::BufferUsages::VERTEX,
        });

        // Pipelines
        let mesh_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 0,
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 12,
                    shader_location: 1,
                },
            ],
        };
        let firefly_layouts = [
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<FireflyInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                ],
            },
        ];

        let depth_state = |write: bool| wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: write,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        };

        let baked_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("baked_pl"),
            bind_group_layouts: &[&uniform_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let single_pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("single_pl"),
            bind_group_layouts: &[&uniform_bgl],
            push_constant_ranges: &[],
        });

        let mesh_pipeline = |label: &str,
                             layout: &wgpu::PipelineLayout,
                             shader: &wgpu::ShaderModule,
                             blend: Option<wgpu::BlendState>| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(layout),
                vertex: wgpu::VertexState {
                    module: shader,
                    entry_point: Some("vs_main"),
                    buffers: std::slice::from_ref(&mesh_layout),
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                },
                primitive: wgpu::PrimitiveState::default(),
                depth_stencil: Some(depth_state(true)),
                multisample: wgpu::MultisampleState::default(),
                fragment: Some(wgpu::FragmentState {
                    module: shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format,
                        blend,
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: wgpu::PipelineCompilationOptions::default(),
                }),
                cache: None,
                multiview: None,
            })
        };
        let baked_pipeline = mesh_pipeline(
            "baked_pipeline",
            &baked_pl,
            &baked_shader,
            Some(wgpu::BlendState::REPLACE),
        );
        let flat_pipeline = mesh_pipeline(
            "flat_pipeline",
            &single_pl,
            &flat_shader,
            Some(wgpu::BlendState::REPLACE),
        );
        let portal_pipeline = mesh_pipeline(
            "portal_pipeline",
            &single_pl,
            &portal_shader,
            Some(wgpu::BlendState::REPLACE),
        );

        // Additive, no depth writes: fireflies glow through each other.
        let additive = wgpu::BlendState {
            color: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::SrcAlpha,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
            alpha: wgpu::BlendComponent {
                src_factor: wgpu::BlendFactor::One,
                dst_factor: wgpu::BlendFactor::One,
                operation: wgpu::BlendOperation::Add,
            },
        };
        let fireflies_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("fireflies_pipeline"),
            layout: Some(&single_pl),
            vertex: wgpu::VertexState {
                module: &fireflies_shader,
                entry_point: Some("vs_main"),
                buffers: &firefly_layouts,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: Some(depth_state(false)),
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &fireflies_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(additive),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        // The material literals are compile-time constants; parsing cannot fail.
        let lamp_color = Color::from_hex(LAMP_LIGHT_COLOR).unwrap();
        let nails_color = Color::from_hex(NAILS_COLOR).unwrap();

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth_view,
            baked_pipeline,
            flat_pipeline,
            portal_pipeline,
            fireflies_pipeline,
            scene_uniform_buffer,
            scene_bind_group,
            texture_bgl,
            linear_sampler,
            lamp_uniform_buffer,
            lamp_bind_group,
            nails_uniform_buffer,
            nails_bind_group,
            lamp_color,
            nails_color,
            portal_uniform_buffer,
            portal_bind_group,
            firefly_uniform_buffer,
            firefly_bind_group,
            quad_vb,
            firefly_instance_vb,
            firefly_count: field.len() as u32,
            scene: None,
            width,
            height,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth_view = create_depth_view(&self.device, width, height);
        }
    }

    /// Upload the loaded model and baked texture. A missing named node is
    /// reported, not panicked on; the scene simply stays absent.
    pub fn upload_scene(
        &mut self,
        model: &SceneModel,
        texture: &BakedTexture,
    ) -> Result<(), SceneError> {
        let baked = self.mesh_buffers("baked", model.node(NodeName::Baked)?);
        let portal = self.mesh_buffers("portal", model.node(NodeName::PortalLight)?);
        let lamp_lights = self.mesh_buffers("lampLights", model.node(NodeName::LampLights)?);
        let fences_nails = self.mesh_buffers("fencesNails", model.node(NodeName::FencesNails)?);

        let tex = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("baked_tex"),
            size: wgpu::Extent3d {
                width: texture.width,
                height: texture.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &tex,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &texture.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * texture.width),
                rows_per_image: Some(texture.height),
            },
            wgpu::Extent3d {
                width: texture.width,
                height: texture.height,
                depth_or_array_layers: 1,
            },
        );
        let tex_view = tex.create_view(&wgpu::TextureViewDescriptor::default());
        let baked_bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("baked_tex_bg"),
            layout: &self.texture_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&tex_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.linear_sampler),
                },
            ],
        });

        self.scene = Some(SceneBuffers {
            baked,
            portal,
            lamp_lights,
            fences_nails,
            baked_bind_group,
        });
        log::info!("scene uploaded: materials assigned to all four named nodes");
        Ok(())
    }

    fn mesh_buffers(&self, label: &str, mesh: &portal_core::MeshData) -> MeshBuffers {
        let vertices: Vec<MeshVertex> = mesh
            .positions
            .iter()
            .zip(mesh.uvs.iter())
            .map(|(p, uv)| MeshVertex {
                position: *p,
                uv: *uv,
            })
            .collect();
        let vertex = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        MeshBuffers {
            vertex,
            index,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub fn render(
        &mut self,
        params: &ShadingParams,
        camera: &Camera,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let view_mat = camera.view_matrix();
        let proj_mat = camera.projection_matrix();
        let view_proj = (proj_mat * view_mat).to_cols_array_2d();

        self.queue.write_buffer(
            &self.scene_uniform_buffer,
            0,
            bytemuck::bytes_of(&SceneUniforms { view_proj }),
        );
        self.queue.write_buffer(
            &self.lamp_uniform_buffer,
            0,
            bytemuck::bytes_of(&FlatUniforms {
                view_proj,
                color: self.lamp_color.to_array4(),
            }),
        );
        self.queue.write_buffer(
            &self.nails_uniform_buffer,
            0,
            bytemuck::bytes_of(&FlatUniforms {
                view_proj,
                color: self.nails_color.to_array4(),
            }),
        );
        self.queue.write_buffer(
            &self.portal_uniform_buffer,
            0,
            bytemuck::bytes_of(&PortalUniforms {
                view_proj,
                color_start: params.portal_color_start.to_array4(),
                color_end: params.portal_color_end.to_array4(),
                time: params.elapsed,
                _pad: [0.0; 3],
            }),
        );
        self.queue.write_buffer(
            &self.firefly_uniform_buffer,
            0,
            bytemuck::bytes_of(&FireflyUniforms {
                view: view_mat.to_cols_array_2d(),
                proj: proj_mat.to_cols_array_2d(),
                resolution: [self.width as f32, self.height as f32],
                time: params.elapsed,
                size: params.firefly_size,
                pixel_ratio: params.pixel_ratio,
                _pad: [0.0; 3],
            }),
        );

        let clear = params.clear_color;
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            if let Some(scene) = &self.scene {
                rpass.set_pipeline(&self.baked_pipeline);
                rpass.set_bind_group(0, &self.scene_bind_group, &[]);
                rpass.set_bind_group(1, &scene.baked_bind_group, &[]);
                draw_mesh(&mut rpass, &scene.baked);

                rpass.set_pipeline(&self.flat_pipeline);
                rpass.set_bind_group(0, &self.lamp_bind_group, &[]);
                draw_mesh(&mut rpass, &scene.lamp_lights);
                rpass.set_bind_group(0, &self.nails_bind_group, &[]);
                draw_mesh(&mut rpass, &scene.fences_nails);

                rpass.set_pipeline(&self.portal_pipeline);
                rpass.set_bind_group(0, &self.portal_bind_group, &[]);
                draw_mesh(&mut rpass, &scene.portal);
            }

            rpass.set_pipeline(&self.fireflies_pipeline);
            rpass.set_bind_group(0, &self.firefly_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.firefly_instance_vb.slice(..));
            rpass.draw(0..6, 0..self.firefly_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn draw_mesh<'p>(rpass: &mut wgpu::RenderPass<'p>, mesh: &'p MeshBuffers) {
    rpass.set_vertex_buffer(0, mesh.vertex.slice(..));
    rpass.set_index_buffer(mesh.index.slice(..), wgpu::IndexFormat::Uint32);
    rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    tex.create_view(&wgpu::TextureViewDescriptor::default())
}
