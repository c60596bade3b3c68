//! Core building blocks: aspect analysis, scaling, cropping, fitting,
//! variant naming, and save helpers. These are internal primitives
//! consumed by the high-level `api` module.
pub mod naming;
pub mod params;
pub mod processing;
