//! Core planning abstractions and capacity accounting.

pub mod assigner;
pub mod error;
pub mod ledger;
pub mod model;
pub mod pipeline;
pub mod planner;
pub mod report;
pub mod sorter;
pub mod store;

pub use assigner::{Placement, TaskAssigner};
pub use error::{AppResult, PlannerError};
pub use ledger::{CapacityLedger, MAX_HOURS_PER_WEEK};
pub use model::{hours_needed, Assignment, Developer, DeveloperId, Task, TaskId, TaskKey};
pub use pipeline::SchedulingPipeline;
pub use planner::Planner;
pub use report::{DeveloperPlan, PlanReport};
pub use sorter::{sorter_for, ArrivalOrder, EffortDescending, TaskSorter};
pub use store::{AssignmentSink, DeveloperStore, TaskStore};
