pub mod texture;

pub use texture::{AssetRequests, LoadReport, PendingLoad, TextureImage, TextureLoader};
