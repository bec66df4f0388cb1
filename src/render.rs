use crate::constants::CLEAR_COLOR;
use fnv::FnvHashMap;
use gallery_core::decode::{fit_within, DecodedImage};
use gallery_core::{
    Camera, Headlight, ObjectId, Scene, SceneChange, SceneObject, Shading, TextureHandle, UploadError,
};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ObjectUniforms {
    model: [[f32; 4]; 4],
    color: [f32; 4],
    params: [f32; 4],
}

impl ObjectUniforms {
    fn from_object(obj: &SceneObject) -> Self {
        let c = helpers::srgb_to_linear(obj.material.color);
        let shading = match obj.material.shading {
            Shading::Lit => 0.0,
            Shading::WoodGrain => 1.0,
            Shading::Fabric => 2.0,
            Shading::Emissive => 3.0,
        };
        let textured = if obj.material.texture.is_some() { 1.0 } else { 0.0 };
        Self {
            model: obj.model.to_cols_array_2d(),
            color: [c[0], c[1], c[2], 1.0],
            params: [shading, textured, 0.0, 0.0],
        }
    }
}

struct GpuObject {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    _uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    texture: Option<TextureHandle>,
}

struct GpuTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,

    frame_uniform_buffer: wgpu::Buffer,
    frame_bind_group: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    texture_bgl: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    // bound for untextured objects
    white: GpuTexture,

    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    objects: FnvHashMap<ObjectId, GpuObject>,
    textures: FnvHashMap<TextureHandle, GpuTexture>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

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
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("gallery_shader"),
            source: wgpu::ShaderSource::Wgsl(gallery_core::GALLERY_WGSL.into()),
        });

        let frame_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("frame_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[helpers::uniform_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
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
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("mesh_pl"),
            bind_group_layouts: &[&frame_bgl, &object_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(&device, &layout, &shader, format);

        let frame_uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("frame_uniforms"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("frame_bg"),
            layout: &frame_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_uniform_buffer.as_entire_binding(),
            }],
        });

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let white = Self::make_texture(
            &device,
            &queue,
            &texture_bgl,
            &sampler,
            "white",
            1,
            1,
            &[255, 255, 255, 255],
        );

        log::info!("[render] WebGPU ready ({:?}, {}x{})", format, width, height);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            frame_uniform_buffer,
            frame_bind_group,
            object_bgl,
            texture_bgl,
            sampler,
            white,
            _depth_tex: depth_tex,
            depth_view,
            objects: FnvHashMap::default(),
            textures: FnvHashMap::default(),
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn make_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        label: &str,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> GpuTexture {
        let (texture, view) = helpers::create_rgba_texture(device, queue, label, width, height, rgba);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        GpuTexture {
            _texture: texture,
            bind_group,
        }
    }

    /// Largest width or height a texture may have on this device.
    #[inline]
    pub fn max_texture_side(&self) -> u32 {
        self.device.limits().max_texture_dimension_2d
    }

    /// Upload a painting image, downscaled first if a side exceeds the device
    /// limit. Nothing is stored on error.
    pub fn upload_texture(&mut self, handle: TextureHandle, image: DecodedImage) -> Result<(), UploadError> {
        let image = fit_within(image, self.max_texture_side())?;
        let tex = Self::make_texture(
            &self.device,
            &self.queue,
            &self.texture_bgl,
            &self.sampler,
            "painting",
            image.width,
            image.height,
            &image.rgba,
        );
        self.textures.insert(handle, tex);
        Ok(())
    }

    pub fn drop_texture(&mut self, handle: TextureHandle) {
        if self.textures.remove(&handle).is_some() {
            log::debug!("[render] released texture {:?}", handle);
        }
    }

    /// Mirror scene changes into GPU buffers.
    pub fn sync(&mut self, scene: &mut Scene) {
        for change in scene.take_changes() {
            match change {
                SceneChange::Added(id) | SceneChange::Updated(id) => match scene.get(id) {
                    Some(obj) => self.upload_object(obj),
                    None => {
                        self.objects.remove(&id);
                    }
                },
                SceneChange::Removed(id) => {
                    self.objects.remove(&id);
                }
            }
        }
    }

    fn upload_object(&mut self, obj: &SceneObject) {
        if obj.mesh.is_empty() {
            self.objects.remove(&obj.id);
            return;
        }
        let vertices = obj.mesh.to_gpu_vertices();
        let vertex_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_vertices"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });
        let index_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("mesh_indices"),
                contents: bytemuck::cast_slice(&obj.mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });
        let uniforms = ObjectUniforms::from_object(obj);
        let uniform_buffer = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("object_uniforms"),
                contents: bytemuck::bytes_of(&uniforms),
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            });
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("object_bg"),
            layout: &self.object_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });
        self.objects.insert(
            obj.id,
            GpuObject {
                vertex_buffer,
                index_buffer,
                index_count: obj.mesh.indices.len() as u32,
                _uniforms: uniform_buffer,
                bind_group,
                texture: obj.material.texture,
            },
        );
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
            let (depth_tex, depth_view) = helpers::create_depth_texture(&self.device, width, height);
            self._depth_tex = depth_tex;
            self.depth_view = depth_view;
        }
    }

    pub fn render(&mut self, camera: &Camera, light: Headlight) -> Result<(), wgpu::SurfaceError> {
        let frame_uniforms = FrameUniforms {
            view_proj: camera.view_projection().to_cols_array_2d(),
            eye: camera.eye.extend(1.0).to_array(),
            light: light.position.extend(light.intensity).to_array(),
        };
        self.queue.write_buffer(
            &self.frame_uniform_buffer,
            0,
            bytemuck::bytes_of(&frame_uniforms),
        );

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                        load: wgpu::LoadOp::Clear(self.clear_color),
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
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            for obj in self.objects.values() {
                let texture = obj
                    .texture
                    .and_then(|t| self.textures.get(&t))
                    .unwrap_or(&self.white);
                rpass.set_bind_group(1, &obj.bind_group, &[]);
                rpass.set_bind_group(2, &texture.bind_group, &[]);
                rpass.set_vertex_buffer(0, obj.vertex_buffer.slice(..));
                rpass.set_index_buffer(obj.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..obj.index_count, 0, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
