use std::fmt;

/// The three resource types the service exposes. Each one owns a table whose
/// columns are all prefixed with the same word (`train_id`, `train_name`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Train,
    Plane,
    History,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [ResourceKind::Train, ResourceKind::Plane, ResourceKind::History];

    /// Name of the backing table, which is also the URL path segment.
    pub fn table(&self) -> &'static str {
        match self {
            ResourceKind::Train => "trains",
            ResourceKind::Plane => "planes",
            ResourceKind::History => "history",
        }
    }

    /// Prefix shared by every column and JSON field of this resource.
    pub fn prefix(&self) -> &'static str {
        match self {
            ResourceKind::Train => "train",
            ResourceKind::Plane => "plane",
            ResourceKind::History => "history",
        }
    }

    /// Human-facing name used in confirmation messages.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Train => "Train",
            ResourceKind::Plane => "Plane",
            ResourceKind::History => "History",
        }
    }

    pub fn id_column(&self) -> String {
        format!("{}_id", self.prefix())
    }

    pub fn name_column(&self) -> String {
        format!("{}_name", self.prefix())
    }

    pub fn price_column(&self) -> String {
        format!("{}_price", self.prefix())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}
