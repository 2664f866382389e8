// Publication Lifecycle Module - Testable State Machine
//
// Everything that decides a status change lives here: the transition
// function itself, the role policy behind the injected authority check,
// pre-publish readiness validation, and scheduled-publish timing.

pub mod policy;
pub mod readiness;
pub mod schedule;
pub mod state_machine;
pub mod traits;
pub mod types;

#[cfg(test)]
pub mod mocks;


pub use policy::{Actor, Role, RoleMatrix};
pub use readiness::{lesson_publish_readiness, program_publish_readiness, ReadinessGap};
pub use schedule::{due_for_publish, is_due, plan_due_publications};
pub use state_machine::{request_transition, TransitionOptions};
pub use traits::PublishAuthority;
pub use types::{CmsAction, PublicationError, PublicationStatus, StatusChange};
