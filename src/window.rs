use std::sync::Arc;
use winit::window::Window as WinitWindow;

use crate::core::window::{ViewportSource, WindowDimensions};

/// Wrapper around the winit window that reports its viewport
pub struct Window {
    inner: Arc<WinitWindow>,
}

impl Window {
    pub fn new(window: Arc<WinitWindow>) -> Self {
        Self { inner: window }
    }

    pub fn inner(&self) -> &Arc<WinitWindow> {
        &self.inner
    }

    pub fn request_redraw(&self) {
        self.inner.request_redraw();
    }
}

impl ViewportSource for Window {
    fn dimensions(&self) -> WindowDimensions {
        let logical = self
            .inner
            .inner_size()
            .to_logical::<u32>(self.inner.scale_factor());
        WindowDimensions::new(logical.width, logical.height)
    }

    fn device_pixel_ratio(&self) -> f64 {
        self.inner.scale_factor()
    }
}
