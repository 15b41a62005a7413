//! Flat color render pipeline.

use wgpu::*;

use super::vertex::PositionVertex;

pub const FLAT_COLOR_SHADER: &str = include_str!("flat_color.wgsl");

/// Configuration for [`FlatColorPipeline`]
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub label: String,
    pub cull_mode: Option<wgpu::Face>,
    pub color_format: TextureFormat,
    /// Depth testing is enabled when set
    pub depth_format: Option<TextureFormat>,
    pub multisample: MultisampleState,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            label: "Flat Color Pipeline".to_string(),
            // keys and panels are single-sided quads seen from both sides
            cull_mode: None,
            color_format: TextureFormat::Bgra8UnormSrgb,
            depth_format: Some(TextureFormat::Depth32Float),
            multisample: MultisampleState::default(),
        }
    }
}

impl PipelineConfig {
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn with_cull_mode(mut self, face: Option<wgpu::Face>) -> Self {
        self.cull_mode = face;
        self
    }

    pub fn with_color_format(mut self, format: TextureFormat) -> Self {
        self.color_format = format;
        self
    }

    pub fn with_depth_format(mut self, format: Option<TextureFormat>) -> Self {
        self.depth_format = format;
        self
    }
}

/// Render pipeline plus the layout of its single per-draw bind group.
pub struct FlatColorPipeline {
    pipeline: RenderPipeline,
    bind_group_layout: BindGroupLayout,
}

impl FlatColorPipeline {
    pub fn new(device: &Device, config: &PipelineConfig) -> Self {
        let shader = device.create_shader_module(ShaderModuleDescriptor {
            label: Some("flat_color"),
            source: ShaderSource::Wgsl(FLAT_COLOR_SHADER.into()),
        });

        let bind_group_layout = device.create_bind_group_layout(&BindGroupLayoutDescriptor {
            label: Some("Draw Uniform Bind Group Layout"),
            entries: &[BindGroupLayoutEntry {
                binding: 0,
                visibility: ShaderStages::VERTEX | ShaderStages::FRAGMENT,
                ty: BindingType::Buffer {
                    ty: BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&PipelineLayoutDescriptor {
            label: Some(&format!("{} Layout", config.label)),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let depth_stencil = config.depth_format.map(|format| DepthStencilState {
            format,
            depth_write_enabled: true,
            depth_compare: CompareFunction::Less,
            stencil: StencilState::default(),
            bias: DepthBiasState::default(),
        });

        let pipeline = device.create_render_pipeline(&RenderPipelineDescriptor {
            label: Some(&config.label),
            layout: Some(&pipeline_layout),
            vertex: VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[PositionVertex::desc()],
                compilation_options: PipelineCompilationOptions::default(),
            },
            fragment: Some(FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(ColorTargetState {
                    format: config.color_format,
                    blend: Some(BlendState::REPLACE),
                    write_mask: ColorWrites::ALL,
                })],
                compilation_options: PipelineCompilationOptions::default(),
            }),
            primitive: PrimitiveState {
                topology: PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: FrontFace::Ccw,
                cull_mode: config.cull_mode,
                polygon_mode: PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil,
            multisample: config.multisample,
            multiview: None,
            cache: None,
        });

        log::debug!("Created pipeline '{}'", config.label);
        Self {
            pipeline,
            bind_group_layout,
        }
    }

    pub fn pipeline(&self) -> &RenderPipeline {
        &self.pipeline
    }

    pub fn bind_group_layout(&self) -> &BindGroupLayout {
        &self.bind_group_layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shader_entry_points() {
        assert!(FLAT_COLOR_SHADER.contains("fn vs_main"));
        assert!(FLAT_COLOR_SHADER.contains("fn fs_main"));
        assert!(FLAT_COLOR_SHADER.contains("@group(0) @binding(0)"));
    }

    #[test]
    fn test_config_builders() {
        let config = PipelineConfig::default()
            .with_label("Offscreen")
            .with_cull_mode(Some(wgpu::Face::Back))
            .with_depth_format(None);
        assert_eq!(config.label, "Offscreen");
        assert_eq!(config.cull_mode, Some(wgpu::Face::Back));
        assert!(config.depth_format.is_none());
    }
}
