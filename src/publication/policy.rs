//! Role policy for CMS actions.
//!
//! The upstream system gated the same actions three different ways across
//! its routers. This pins one explicit matrix: publish, schedule and
//! archive are admin-only; cancelling a schedule returns content to draft
//! and is open to editors too; viewers touch nothing.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::publication::traits::PublishAuthority;
use crate::publication::types::CmsAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    Viewer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        };
        write!(f, "{}", label)
    }
}

/// Whoever is asking for a transition. Identity is opaque; only the role
/// feeds the default policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self { id: id.into(), role }
    }
}

/// The default role-to-action matrix.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleMatrix;

impl RoleMatrix {
    pub fn allows(&self, role: Role, action: CmsAction) -> bool {
        match (role, action) {
            (Role::Admin, _) => true,
            (Role::Editor, CmsAction::CancelSchedule) => true,
            (Role::Editor, _) => false,
            (Role::Viewer, _) => false,
        }
    }
}

impl PublishAuthority for RoleMatrix {
    fn may_publish(&self, actor: &Actor) -> bool {
        self.allows(actor.role, CmsAction::Publish)
    }

    fn may_archive(&self, actor: &Actor) -> bool {
        self.allows(actor.role, CmsAction::Archive)
    }
}
