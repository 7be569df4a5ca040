//! Row-to-page distribution

mod measure;
mod pagination;

pub use measure::{FixedHeights, MeasureHeight, UniformHeights};
pub use pagination::{paginate, Page, PageConstraints, PaginationEngine, PaginationResult};
