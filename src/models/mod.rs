//! Program Increment domain models.
//!
//! Provides the data types shared by planning, execution, and metrics.
//!
//! # Domain Mappings
//!
//! | u-pi-planning | SAFe | Scheduling |
//! |---------------|------|------------|
//! | WorkItem | Feature / Epic / Story | Job |
//! | Team | Agile Team | Resource |
//! | Dependency | Program board dependency | Precedence arc |
//! | ProgressRecord | Sprint review | Progress snapshot |

mod dependency;
mod progress;
mod team;
mod work_item;

pub use dependency::Dependency;
pub use progress::{ProgressRecord, SprintRound};
pub use team::{Member, Team};
pub use work_item::{ItemKind, ItemStatus, WorkItem};
