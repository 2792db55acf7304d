use std::time::Duration;

use uniforma::{
    FrameClock, GpuContext, LoggingConfig, Mat3Uniform, Mat4Uniform, Perspective, SceneConfig,
    Slider, Transform2d, Transform3d, TransformBuffer, build_transform_3d, init_logging,
};

const FRAMES: u32 = 5;
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Input events replayed against both scenes, as `(element id, value)`.
const INPUT_EVENTS: &[(&str, &str)] = &[
    ("sliderX", "0.2"),
    ("sliderY", "-0.1"),
    ("sliderRotation", "30"),
    ("sliderScaleX", "1.5"),
    ("sliderScaleY", "wide"),
    ("translateX", "10"),
    ("scale", "60"),
    ("rotateX", "20"),
    ("rotateY", "-15"),
    ("rotationSpeed", "120"),
    ("shapeSelect", "cone"),
];

struct Uploads {
    gpu: GpuContext,
    sprite: TransformBuffer<Mat3Uniform>,
    cube: TransformBuffer<Mat4Uniform>,
    _bind_group: wgpu::BindGroup,
}

impl Uploads {
    fn new(gpu: GpuContext) -> Self {
        let sprite = TransformBuffer::new(&gpu.device, "Sprite Transform");
        let cube = TransformBuffer::new(&gpu.device, "Cube Transform");

        let layout = gpu
            .device
            .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Transform Bind Group Layout"),
                entries: &[
                    TransformBuffer::<Mat3Uniform>::layout_entry(0),
                    TransformBuffer::<Mat4Uniform>::layout_entry(1),
                ],
            });
        let bind_group = gpu.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Transform Bind Group"),
            layout: &layout,
            entries: &[sprite.bind_group_entry(0), cube.bind_group_entry(1)],
        });

        Self {
            gpu,
            sprite,
            cube,
            _bind_group: bind_group,
        }
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let uploads = match GpuContext::headless() {
        Ok(gpu) => Some(Uploads::new(gpu)),
        Err(e) => {
            log::error!("{e}; matrices will be built but not uploaded");
            None
        }
    };

    let mut sprite = Transform2d::new();
    let mut cube = Transform3d::new();
    for &(id, raw) in INPUT_EVENTS {
        let Some(slider) = Slider::from_id(id) else {
            log::debug!("no slider bound to '{id}'");
            continue;
        };
        let applied = if slider.is_3d() {
            cube.apply_slider(slider, raw)
        } else {
            sprite.apply_slider(slider, raw)
        };
        if let Err(e) = applied {
            log::warn!("ignored input: {e}");
        }
    }

    let sprite_matrix = Mat3Uniform::from(sprite.matrix());
    log::info!("sprite: {:?}", sprite_matrix.to_flat());

    let scene = SceneConfig::new().projection(Perspective::new().viewport(800, 600));
    let mut clock = FrameClock::new();

    if let Some(uploads) = &uploads {
        uploads.sprite.write(&uploads.gpu.queue, &sprite_matrix);
    }

    for _ in 0..FRAMES {
        std::thread::sleep(FRAME_TIME);
        let dt = clock.tick();

        let matrix = Mat4Uniform::from(build_transform_3d(&cube, &scene, clock.now_ms()));
        log::info!(
            "frame {} ({:.0} fps): {:?}",
            clock.frame_count(),
            FrameClock::fps(dt),
            matrix.to_flat()
        );

        if let Some(uploads) = &uploads {
            uploads.cube.write(&uploads.gpu.queue, &matrix);
            uploads.gpu.queue.submit(std::iter::empty());
        }
    }
}
