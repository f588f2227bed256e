//! The static permission catalog and the built-in role tables.
//!
//! Permission names follow the `resource:action` convention. The role
//! tables here are the source of truth for database seeding and for
//! resolving a role name to its permission snapshot.

/// User management permissions.
pub const USERS_CREATE: &str = "users:create";
pub const USERS_READ: &str = "users:read";
pub const USERS_UPDATE: &str = "users:update";
pub const USERS_DELETE: &str = "users:delete";
pub const USERS_LIST: &str = "users:list";

/// Role management permissions.
pub const ROLES_CREATE: &str = "roles:create";
pub const ROLES_READ: &str = "roles:read";
pub const ROLES_UPDATE: &str = "roles:update";
pub const ROLES_DELETE: &str = "roles:delete";
pub const ROLES_LIST: &str = "roles:list";

/// Permission catalog management permissions.
pub const PERMISSIONS_CREATE: &str = "permissions:create";
pub const PERMISSIONS_READ: &str = "permissions:read";
pub const PERMISSIONS_UPDATE: &str = "permissions:update";
pub const PERMISSIONS_DELETE: &str = "permissions:delete";
pub const PERMISSIONS_LIST: &str = "permissions:list";

/// Session and self-service permissions.
pub const AUTH_REGISTER: &str = "auth:register";
pub const AUTH_LOGIN: &str = "auth:login";
pub const AUTH_LOGOUT: &str = "auth:logout";
pub const AUTH_REFRESH: &str = "auth:refresh";
pub const AUTH_PROFILE_READ: &str = "auth:profile:read";
pub const AUTH_PROFILE_UPDATE: &str = "auth:profile:update";

/// Wildcard grant. A snapshot containing this passes every permission
/// check without enumerating the catalog.
pub const ADMIN_ALL: &str = "admin:all";

/// Permissions granted to the built-in `user` role.
pub const USER_ROLE_PERMISSIONS: &[&str] = &[
    AUTH_LOGIN,
    AUTH_LOGOUT,
    AUTH_REFRESH,
    AUTH_PROFILE_READ,
    AUTH_PROFILE_UPDATE,
    USERS_READ,
];

/// Permissions granted to the built-in `admin` role. A superset of the
/// `user` role plus user management and read access to the catalog.
pub const ADMIN_ROLE_PERMISSIONS: &[&str] = &[
    AUTH_LOGIN,
    AUTH_LOGOUT,
    AUTH_REFRESH,
    AUTH_PROFILE_READ,
    AUTH_PROFILE_UPDATE,
    USERS_READ,
    USERS_CREATE,
    USERS_UPDATE,
    USERS_DELETE,
    USERS_LIST,
    ROLES_READ,
    ROLES_LIST,
    PERMISSIONS_READ,
    PERMISSIONS_LIST,
];

/// Permissions granted to the built-in `super_admin` role. The wildcard
/// grant alone, not an enumeration of the catalog.
pub const SUPER_ADMIN_ROLE_PERMISSIONS: &[&str] = &[ADMIN_ALL];

/// Every catalog entry with its human description, used for seeding.
pub const CATALOG: &[(&str, &str)] = &[
    (USERS_CREATE, "Create user accounts"),
    (USERS_READ, "Read user accounts"),
    (USERS_UPDATE, "Update user accounts"),
    (USERS_DELETE, "Delete user accounts"),
    (USERS_LIST, "List user accounts"),
    (ROLES_CREATE, "Create roles"),
    (ROLES_READ, "Read roles"),
    (ROLES_UPDATE, "Update roles"),
    (ROLES_DELETE, "Delete roles"),
    (ROLES_LIST, "List roles"),
    (PERMISSIONS_CREATE, "Create permissions"),
    (PERMISSIONS_READ, "Read permissions"),
    (PERMISSIONS_UPDATE, "Update permissions"),
    (PERMISSIONS_DELETE, "Delete permissions"),
    (PERMISSIONS_LIST, "List permissions"),
    (AUTH_REGISTER, "Register an account"),
    (AUTH_LOGIN, "Log in"),
    (AUTH_LOGOUT, "Log out"),
    (AUTH_REFRESH, "Refresh a session"),
    (AUTH_PROFILE_READ, "Read own profile"),
    (AUTH_PROFILE_UPDATE, "Update own profile"),
    (ADMIN_ALL, "Unrestricted access to every operation"),
];

/// Built-in role names paired with their permission tables.
pub const BUILT_IN_ROLES: &[(&str, &str, &[&str])] = &[
    ("user", "Standard account with self-service access", USER_ROLE_PERMISSIONS),
    ("admin", "User management and catalog read access", ADMIN_ROLE_PERMISSIONS),
    ("super_admin", "Unrestricted wildcard access", SUPER_ADMIN_ROLE_PERMISSIONS),
];

/// Resolves a role name to its permission table.
///
/// Matching is case-insensitive; an unknown role resolves to no
/// permissions rather than an error.
pub fn permissions_for_role(role_name: &str) -> Vec<String> {
    let needle = role_name.trim().to_lowercase();
    BUILT_IN_ROLES
        .iter()
        .find(|(name, _, _)| *name == needle)
        .map(|(_, _, perms)| perms.iter().map(|p| (*p).to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_lookup_is_case_insensitive() {
        assert_eq!(
            permissions_for_role("Admin"),
            permissions_for_role("admin")
        );
        assert_eq!(
            permissions_for_role("  SUPER_ADMIN  "),
            vec![ADMIN_ALL.to_string()]
        );
    }

    #[test]
    fn test_unknown_role_has_no_permissions() {
        assert!(permissions_for_role("auditor").is_empty());
        assert!(permissions_for_role("").is_empty());
    }

    #[test]
    fn test_admin_is_superset_of_user() {
        for perm in USER_ROLE_PERMISSIONS {
            assert!(
                ADMIN_ROLE_PERMISSIONS.contains(perm),
                "admin role is missing {perm}"
            );
        }
    }

    #[test]
    fn test_super_admin_holds_only_the_wildcard() {
        assert_eq!(SUPER_ADMIN_ROLE_PERMISSIONS, &[ADMIN_ALL]);
    }

    #[test]
    fn test_catalog_names_are_well_formed() {
        for (name, _) in CATALOG {
            assert!(name.contains(':'), "{name} is not resource:action");
            assert_eq!(*name, name.to_lowercase());
        }
    }
}
