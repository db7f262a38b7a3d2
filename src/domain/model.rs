/// A named block of literal text written verbatim to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub content: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Healthy,
    Unhealthy { status: u16 },
    Unreachable { reason: String },
    Skipped,
}

impl HealthStatus {
    /// Only a 200 answer counts as reachable; every other outcome collapses to false.
    pub fn is_reachable(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Created,
    Updated,
    Unchanged,
}

impl WriteStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WriteStatus::Created => "created:",
            WriteStatus::Updated => "updated:",
            WriteStatus::Unchanged => "unchanged:",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: String,
    pub status: WriteStatus,
}

#[derive(Debug, Clone)]
pub struct SetupReport {
    pub service_reachable: bool,
    pub files: Vec<WrittenFile>,
    pub instructions: String,
}

impl SetupReport {
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}
