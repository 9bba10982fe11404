pub mod collision;
pub mod physics;
pub mod pillars;
pub mod scoring;
pub mod spawn;

pub use collision::*;
pub use physics::*;
pub use pillars::*;
pub use scoring::*;
pub use spawn::*;
