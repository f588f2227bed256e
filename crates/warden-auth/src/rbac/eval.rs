//! Pure permission evaluation over embedded snapshots.
//!
//! These functions operate on the permission list carried inside a
//! token, not on live database state. A user whose role changed after
//! token issuance keeps the old snapshot until refresh.

use super::catalog::ADMIN_ALL;

/// Whether the snapshot grants a single permission.
///
/// The wildcard grant short-circuits every check.
pub fn has_permission(snapshot: &[String], required: &str) -> bool {
    if snapshot.iter().any(|p| p == ADMIN_ALL) {
        return true;
    }
    snapshot.iter().any(|p| p == required)
}

/// Whether the snapshot grants at least one of the required permissions.
///
/// An empty requirement list is satisfied by nobody; use no guard at
/// all for unprotected operations.
pub fn has_any_permission(snapshot: &[String], required: &[&str]) -> bool {
    if snapshot.iter().any(|p| p == ADMIN_ALL) {
        return true;
    }
    required.iter().any(|r| snapshot.iter().any(|p| p == r))
}

/// Whether the snapshot grants every required permission.
pub fn has_all_permissions(snapshot: &[String], required: &[&str]) -> bool {
    if snapshot.iter().any(|p| p == ADMIN_ALL) {
        return true;
    }
    required.iter().all(|r| snapshot.iter().any(|p| p == r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(perms: &[&str]) -> Vec<String> {
        perms.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_direct_grant() {
        let snap = snapshot(&["users:read", "users:list"]);
        assert!(has_permission(&snap, "users:read"));
        assert!(!has_permission(&snap, "users:delete"));
    }

    #[test]
    fn test_wildcard_short_circuits_all_checks() {
        let snap = snapshot(&[ADMIN_ALL]);
        assert!(has_permission(&snap, "users:delete"));
        assert!(has_any_permission(&snap, &["roles:create"]));
        assert!(has_all_permissions(&snap, &["users:read", "roles:delete"]));
        // Even an empty requirement list passes under the wildcard.
        assert!(has_any_permission(&snap, &[]));
    }

    #[test]
    fn test_any_requires_at_least_one_match() {
        let snap = snapshot(&["users:read"]);
        assert!(has_any_permission(&snap, &["users:delete", "users:read"]));
        assert!(!has_any_permission(&snap, &["users:delete", "roles:read"]));
        assert!(!has_any_permission(&snap, &[]));
    }

    #[test]
    fn test_all_requires_every_match() {
        let snap = snapshot(&["users:read", "users:list"]);
        assert!(has_all_permissions(&snap, &["users:read", "users:list"]));
        assert!(!has_all_permissions(&snap, &["users:read", "users:delete"]));
        // Vacuously true for an empty requirement list.
        assert!(has_all_permissions(&snap, &[]));
    }

    #[test]
    fn test_empty_snapshot_grants_nothing() {
        let snap: Vec<String> = vec![];
        assert!(!has_permission(&snap, "users:read"));
        assert!(!has_any_permission(&snap, &["users:read"]));
    }
}
