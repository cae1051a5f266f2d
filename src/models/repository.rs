use serde::{Deserialize, Serialize};

/// Result of a create/delete request. `success=false` means the request was
/// valid but had no effect (already exists, nothing to delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleOutcome {
    pub success: bool,
}

impl LifecycleOutcome {
    pub fn applied() -> Self {
        Self { success: true }
    }

    pub fn no_effect() -> Self {
        Self { success: false }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryNameForm {
    #[serde(default)]
    pub name: String,
}
