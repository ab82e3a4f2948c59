pub mod axis;
pub mod builder;
pub mod limit;
pub mod result;
pub mod sort;

pub use axis::{CellIndex, DistributionKey, distribution_axis};
pub use builder::{Counters, HyperMapResultBuilder};
pub use limit::BucketLimiter;
pub use result::{DistributionEntry, GroupEntry, HyperMapResult, MeasureResult};
pub use sort::{HyperMapOrder, ResultSorter};

#[cfg(test)]
mod axis_test;
