// Type tokens that select the namespace deletion path
pub const NAMESPACE_TYPE_TOKENS: [&str; 2] = ["namespace", "ns"];

// Namespace lifecycle
pub const NAMESPACE_TERMINATING_PHASE: &str = "Terminating";
pub const NAMESPACE_FINALIZE_SUBRESOURCE: &str = "finalize";

// Deletion
pub const FORCE_DELETE_GRACE_PERIOD_SECONDS: u32 = 0;
