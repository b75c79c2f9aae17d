//! Role based authorization checker

use crate::services::AuthorizationChecker;
use std::collections::HashSet;

/// Fixed set of roles granted to the current user
///
/// Superusers are granted every role.
///
/// # Example
///
/// ```rust
/// use reinhardt_grid::security::GrantedRoles;
/// use reinhardt_grid::AuthorizationChecker;
///
/// let roles = GrantedRoles::new(["ROLE_USER", "ROLE_EDITOR"]);
/// assert!(roles.is_granted("ROLE_EDITOR"));
/// assert!(!roles.is_granted("ROLE_ADMIN"));
///
/// assert!(GrantedRoles::superuser().is_granted("ROLE_ADMIN"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GrantedRoles {
	roles: HashSet<String>,
	is_superuser: bool,
}

impl GrantedRoles {
	/// Grants the given roles
	pub fn new<I, S>(roles: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			roles: roles.into_iter().map(Into::into).collect(),
			is_superuser: false,
		}
	}

	/// Grants every role
	pub fn superuser() -> Self {
		Self {
			roles: HashSet::new(),
			is_superuser: true,
		}
	}

	/// Grants no role
	pub fn anonymous() -> Self {
		Self::default()
	}

	/// Adds a role
	pub fn grant(&mut self, role: impl Into<String>) {
		self.roles.insert(role.into());
	}
}

impl AuthorizationChecker for GrantedRoles {
	fn is_granted(&self, role: &str) -> bool {
		if self.is_superuser {
			return true;
		}
		self.roles.contains(role)
	}
}
