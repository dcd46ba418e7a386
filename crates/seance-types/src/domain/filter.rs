use super::session::SessionDescriptor;

/// Query applied to a discovery run.
///
/// The rig and path criteria only look at the decoded project path, so the
/// scanner checks them before opening any file of that project. The beacon and
/// role criteria need the scanned descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionFilter {
    /// Only keep sessions carrying a `[GAS TOWN]` beacon
    pub gastown_only: bool,
    /// Case-insensitive substring of the role or the project path
    pub role: Option<String>,
    /// Rig name; the project path must contain `/<rig>/`
    pub rig: Option<String>,
    /// Substring of the project path
    pub path: Option<String>,
    /// Max sessions to return (0 = unlimited)
    pub limit: usize,
}

impl SessionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gastown_only(mut self, gastown_only: bool) -> Self {
        self.gastown_only = gastown_only;
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = non_empty(role.into());
        self
    }

    pub fn rig(mut self, rig: impl Into<String>) -> Self {
        self.rig = non_empty(rig.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = non_empty(path.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Rig and path criteria, checked against a decoded project path.
    pub fn matches_project(&self, project_path: &str) -> bool {
        if let Some(rig) = &self.rig
            && !project_path.contains(&format!("/{}/", rig))
        {
            return false;
        }
        if let Some(path) = &self.path
            && !project_path.contains(path.as_str())
        {
            return false;
        }
        true
    }

    /// Beacon and role criteria, checked against a scanned descriptor.
    pub fn matches_session(&self, session: &SessionDescriptor) -> bool {
        if self.gastown_only && !session.is_gastown {
            return false;
        }
        if let Some(role) = &self.role {
            let needle = role.to_lowercase();
            let role_match = session.role.to_lowercase().contains(&needle);
            let path_match = session.path.to_lowercase().contains(&needle);
            if !role_match && !path_match {
                return false;
            }
        }
        true
    }

    /// Sort newest first and cut the list down to the limit.
    pub fn finish(&self, mut sessions: Vec<SessionDescriptor>) -> Vec<SessionDescriptor> {
        sort_newest_first(&mut sessions);
        if self.limit > 0 {
            sessions.truncate(self.limit);
        }
        sessions
    }
}

/// Order by start time descending. Sessions without a start time go last.
///
/// The sort is stable, so equal timestamps keep their scan order.
pub fn sort_newest_first(sessions: &mut [SessionDescriptor]) {
    sessions.sort_by(|a, b| b.start_time.cmp(&a.start_time));
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
