mod batch;
mod gpu;
mod texture_cache;

pub use batch::{DrawBatch, FrameBatches};
pub use gpu::WgpuRenderer;
pub use texture_cache::TextureCache;
