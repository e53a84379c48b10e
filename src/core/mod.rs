pub mod sweep;
pub mod tilt;
pub mod timing;
pub mod verify;

pub use sweep::*;
pub use tilt::*;
pub use timing::*;
pub use verify::*;
