use anyhow::{Context, Result};
use wgpu::SurfaceError;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use super::error::SurfaceErrorAction;
use super::init::GpuInit;

/// Byte order of the swapchain texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PixelFormat {
    Rgba8,
    Bgra8,
}

impl PixelFormat {
    fn of(format: wgpu::TextureFormat) -> Option<Self> {
        use wgpu::TextureFormat as F;
        match format {
            F::Rgba8Unorm | F::Rgba8UnormSrgb => Some(Self::Rgba8),
            F::Bgra8Unorm | F::Bgra8UnormSrgb => Some(Self::Bgra8),
            _ => None,
        }
    }

    /// Writes RGBA8 `src` into `dst` in this byte order.
    pub fn convert_from_rgba(self, src: &[u8], dst: &mut Vec<u8>) {
        dst.clear();
        dst.extend_from_slice(src);
        if self == Self::Bgra8 {
            for px in dst.chunks_exact_mut(4) {
                px.swap(0, 2);
            }
        }
    }
}

/// Owns wgpu core objects and the surface configuration.
///
/// Frames are produced on the CPU and uploaded with a queue texture write, so
/// the surface is configured as a copy destination and no render pipeline
/// exists.
pub struct Gpu<'w> {
    /// Surface bound to the window; the window must outlive the `Gpu`.
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pixel_format: PixelFormat,

    /// Current drawable size in physical pixels.
    size: PhysicalSize<u32>,

    /// Reused upload buffer for byte-order conversion.
    staging: Vec<u8>,
}

impl<'w> Gpu<'w> {
    /// Creates a GPU context bound to a window.
    pub async fn new(window: &'w Window, init: GpuInit) -> Result<Self> {
        let size = window.inner_size();
        anyhow::ensure!(size.width > 0 && size.height > 0, "window has zero size");

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create wgpu surface")?;

        // No shaders run; any adapter that can present is enough.
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("failed to find a suitable GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("udim-engine device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_defaults()
                    .using_resolution(adapter.limits()),
                experimental_features: wgpu::ExperimentalFeatures::disabled(),
                memory_hints: wgpu::MemoryHints::MemoryUsage,
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create wgpu device/queue")?;

        let caps = surface.get_capabilities(&adapter);
        anyhow::ensure!(
            caps.usages.contains(wgpu::TextureUsages::COPY_DST),
            "surface does not accept texture copies"
        );

        let format = choose_surface_format(&caps.formats, init.prefer_srgb)
            .context("no 8-bit RGBA/BGRA surface format available")?;
        let pixel_format = PixelFormat::of(format).context("unsupported surface format")?;

        let alpha_mode = init
            .alpha_mode
            .filter(|m| caps.alpha_modes.contains(m))
            .unwrap_or_else(|| {
                caps.alpha_modes
                    .first()
                    .copied()
                    .unwrap_or(wgpu::CompositeAlphaMode::Auto)
            });

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::COPY_DST,
            format,
            width: size.width,
            height: size.height,
            present_mode: init.present_mode,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: init.desired_maximum_frame_latency,
        };
        surface.configure(&device, &config);

        log::info!(
            "gpu ready: {} ({:?}), surface {:?} {}x{}",
            adapter.get_info().name,
            adapter.get_info().backend,
            format,
            size.width,
            size.height
        );

        Ok(Gpu {
            surface,
            device,
            queue,
            config,
            pixel_format,
            size,
            staging: Vec::new(),
        })
    }

    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current drawable size (physical pixels).
    pub fn size(&self) -> PhysicalSize<u32> {
        self.size
    }

    /// Reconfigures the surface after a resize.
    ///
    /// A 0x0 surface cannot be configured; configuration is deferred until
    /// the next non-zero size.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Uploads one RGBA8 frame into the next swapchain texture and presents it.
    ///
    /// Frames whose size does not match the configured surface are dropped;
    /// that only happens transiently while a resize is in flight.
    pub fn present_pixels(
        &mut self,
        width: u32,
        height: u32,
        rgba: &[u8],
    ) -> std::result::Result<(), SurfaceError> {
        if width != self.config.width
            || height != self.config.height
            || rgba.len() != (width as usize) * (height as usize) * 4
        {
            log::trace!(
                "dropping {width}x{height} frame for {}x{} surface",
                self.config.width,
                self.config.height
            );
            return Ok(());
        }

        let surface_texture = self.surface.get_current_texture()?;
        self.pixel_format.convert_from_rgba(rgba, &mut self.staging);

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &surface_texture.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.staging,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );

        // Flushes the pending write before the texture is presented.
        self.queue.submit(std::iter::empty());
        surface_texture.present();
        Ok(())
    }

    /// Converts a `SurfaceError` into a higher-level action.
    pub fn handle_surface_error(&mut self, err: SurfaceError) -> SurfaceErrorAction {
        match err {
            SurfaceError::Lost | SurfaceError::Outdated => {
                if self.size.width > 0 && self.size.height > 0 {
                    self.surface.configure(&self.device, &self.config);
                }
                SurfaceErrorAction::Reconfigured
            }
            SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
            SurfaceError::Timeout | SurfaceError::Other => SurfaceErrorAction::SkipFrame,
        }
    }
}

/// Picks an 8-bit RGBA/BGRA format, sRGB first when preferred.
fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    use wgpu::TextureFormat as F;

    let srgb = [F::Bgra8UnormSrgb, F::Rgba8UnormSrgb];
    let linear = [F::Bgra8Unorm, F::Rgba8Unorm];
    let order: [F; 4] = if prefer_srgb {
        [srgb[0], srgb[1], linear[0], linear[1]]
    } else {
        [linear[0], linear[1], srgb[0], srgb[1]]
    };

    order.into_iter().find(|f| formats.contains(f))
}
