/// Roles that name themselves when they appear as a path segment.
const STANDALONE_ROLES: &[&str] = &["witness", "refinery", "deacon", "mayor"];

/// Roles whose members live one segment below (e.g. `crew/joe`).
const GROUP_ROLES: &[&str] = &["crew", "polecats"];

/// Best-effort role inference from a project path, for sessions without a beacon.
///
/// Scans segments from the end. A standalone role segment wins as-is, a group
/// segment is joined with the member name that follows it. Otherwise the last
/// segment is returned.
pub fn infer_role_from_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').collect();

    for (i, part) in parts.iter().enumerate().rev() {
        if STANDALONE_ROLES.contains(part) {
            return part.to_string();
        }
        if GROUP_ROLES.contains(part) {
            return match parts.get(i + 1) {
                Some(member) => format!("{}/{}", part, member),
                None => part.to_string(),
            };
        }
    }

    parts.last().map(|p| p.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standalone_roles() {
        assert_eq!(infer_role_from_path("/Users/stevey/gt/gastown/witness"), "witness");
        assert_eq!(infer_role_from_path("/Users/stevey/gt/deacon"), "deacon");
        assert_eq!(infer_role_from_path("/Users/stevey/gt/mayor/rig"), "mayor");
    }

    #[test]
    fn test_group_roles_include_member() {
        assert_eq!(
            infer_role_from_path("/Users/stevey/gt/gastown/crew/joe"),
            "crew/joe"
        );
        assert_eq!(
            infer_role_from_path("/Users/stevey/gt/beads/polecats/furiosa"),
            "polecats/furiosa"
        );
    }

    #[test]
    fn test_group_role_without_member() {
        assert_eq!(infer_role_from_path("/Users/stevey/gt/gastown/crew"), "crew");
    }

    #[test]
    fn test_rightmost_role_wins() {
        assert_eq!(
            infer_role_from_path("/Users/stevey/gt/crew/joe/refinery"),
            "refinery"
        );
    }

    #[test]
    fn test_falls_back_to_last_segment() {
        assert_eq!(infer_role_from_path("/Users/stevey/projects/beads"), "beads");
        assert_eq!(infer_role_from_path(""), "");
    }
}
