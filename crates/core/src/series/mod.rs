//! Daily time-series downsampling for display-bound outputs.

pub mod downsample;
pub mod error;
pub mod resolution;


pub use downsample::downsample;
pub use error::SeriesError;
pub use resolution::Resolution;
