use std::fmt::{self, Display, Formatter};

/// One access-control rule in the platform's `action("role")` string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permission {
    pub action: PermissionAction,
    pub role: Role,
}

impl Permission {
    pub fn new(action: PermissionAction, role: Role) -> Self {
        Self { action, role }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionAction {
    Read,
    Write,
    Update,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Any,
    Users,
    Guests,
}

impl Display for PermissionAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PermissionAction::Read => write!(f, "read"),
            PermissionAction::Write => write!(f, "write"),
            PermissionAction::Update => write!(f, "update"),
            PermissionAction::Delete => write!(f, "delete"),
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Role::Any => write!(f, "any"),
            Role::Users => write!(f, "users"),
            Role::Guests => write!(f, "guests"),
        }
    }
}

impl Display for Permission {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(\"{}\")", self.action, self.role)
    }
}

/// Read/write/update/delete for any actor. Both the events collection and
/// the image bucket are provisioned wide open.
pub fn open_access() -> Vec<Permission> {
    vec![
        Permission::new(PermissionAction::Read, Role::Any),
        Permission::new(PermissionAction::Write, Role::Any),
        Permission::new(PermissionAction::Update, Role::Any),
        Permission::new(PermissionAction::Delete, Role::Any),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_platform_string_form() {
        let rule = Permission::new(PermissionAction::Read, Role::Any);
        assert_eq!(rule.to_string(), r#"read("any")"#);

        let rule = Permission::new(PermissionAction::Delete, Role::Users);
        assert_eq!(rule.to_string(), r#"delete("users")"#);
    }

    #[test]
    fn open_access_covers_all_actions() {
        let rendered: Vec<String> = open_access().iter().map(Permission::to_string).collect();
        assert_eq!(
            rendered,
            vec![
                r#"read("any")"#,
                r#"write("any")"#,
                r#"update("any")"#,
                r#"delete("any")"#,
            ]
        );
    }
}
