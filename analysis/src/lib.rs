//! # Domain crate for OptiScan face/frame analysis
//!
//! Pure data types and logic shared by every frontend and the server.
//! Nothing in here touches the network or the database, so the crate
//! compiles unchanged for WASM and native targets.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | `FaceAnalysis`, `Frame` and friends, the types that cross the server/client boundary |
//! | [`recommend`] | Frame selection and the per-frame compatibility score |
//! | [`units`] | Pixel→real-unit conversion and optometry sizing recommendations |

pub mod models;
pub mod recommend;
pub mod units;

pub use models::{FaceAnalysis, FaceMeasurements, Frame, FrameColor, FrameMeasurements};
pub use recommend::{compatibility, default_frames, recommended_frames};
