/// Window dimensions in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowDimensions {
    pub width: u32,
    pub height: u32,
}

impl WindowDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Host environment that reports the viewport size
pub trait ViewportSource {
    /// Current viewport dimensions in logical pixels
    fn dimensions(&self) -> WindowDimensions;

    /// Physical pixels per logical pixel
    fn device_pixel_ratio(&self) -> f64;
}

/// Viewport source with fixed values, used by the headless driver
#[derive(Debug, Clone, Copy)]
pub struct StaticViewport {
    pub dimensions: WindowDimensions,
    pub device_pixel_ratio: f64,
}

impl StaticViewport {
    pub fn new(width: u32, height: u32, device_pixel_ratio: f64) -> Self {
        Self {
            dimensions: WindowDimensions::new(width, height),
            device_pixel_ratio,
        }
    }
}

impl ViewportSource for StaticViewport {
    fn dimensions(&self) -> WindowDimensions {
        self.dimensions
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.device_pixel_ratio
    }
}
