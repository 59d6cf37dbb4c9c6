//! RBAC type definitions

/// Outcome of an admin-area gate check
///
/// Denial degrades to a redirect at the HTTP layer, never an error status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Principal may enter the admin area
    Allow,
    /// Principal is redirected to the default landing page
    Deny,
}

impl GateDecision {
    /// Whether the check allowed access
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow)
    }
}
