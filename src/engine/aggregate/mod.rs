pub mod cell;
pub mod ops;
pub mod plan;

pub use cell::{CellAccumulator, CellSamples};
pub use ops::{PreparedDurations, aggregate};
pub use plan::{AggregatePlan, Measure};
