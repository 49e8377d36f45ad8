/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// Canvas pixels are sRGB-encoded bytes, so either choice presents them
    /// unchanged; sRGB keeps blending on the compositor side consistent.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    pub present_mode: wgpu::PresentMode,

    /// Alpha mode preference. Falls back to the first supported mode.
    ///
    /// Defaults to opaque: cleared canvas pixels are transparent black and
    /// should show as black, not as the desktop behind the window.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    /// Desired maximum frame latency for the surface. A hint.
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::Opaque),
            desired_maximum_frame_latency: 2,
        }
    }
}
