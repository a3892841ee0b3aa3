//! 증기 상태 결정과 두 상태 비교.

pub mod comparator;
pub mod engine;
pub mod if97;
pub mod resolver;
pub mod state;

pub use comparator::{
    Comparison, ComparisonError, DualStateComparator, StateFailure, StateIndex, StateInputs,
};
pub use engine::{EngineError, PropertyEngine};
pub use if97::If97Engine;
pub use resolver::{ResolveError, StateResolver};
pub use state::{DeltaSet, PropertySpec, ThermoState};
