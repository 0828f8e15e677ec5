pub mod clock;
pub mod controller;
pub mod frame;
pub mod gpu_context;
pub mod input_adapter;
pub mod window;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use frame::{FixedStepFrames, FrameInfo};
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use window::{StaticViewport, ViewportSource, WindowDimensions};
