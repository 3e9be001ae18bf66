//! Role - A named job function that determines required training
//!
//! Role is a Value Object, compared by value.
//! Roles define WHAT an employee does; the Catalog maps each role
//! to the courses that job requires.

/// Unique identifier for a Role
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoleId(String);

impl RoleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Role - A job role from the Catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: RoleId,
    /// Display name, also the sort key on an employee's role list
    name: String,
}

impl Role {
    /// Create a new Role
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> &RoleId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_equality() {
        // Value Object: same id and name = equal
        let a = Role::new(RoleId::new("R1"), "Engineer");
        let b = Role::new(RoleId::new("R1"), "Engineer");
        let c = Role::new(RoleId::new("R2"), "Manager");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_role_displays_name() {
        let role = Role::new(RoleId::new("R1"), "Engineer");
        assert_eq!(role.to_string(), "Engineer");
        assert_eq!(role.id().to_string(), "R1");
    }
}
