/// Worker slot that profile-level settings are read from.
///
/// Settings are resolved once at startup, so only one of the per-worker states
/// is consulted even though every worker loads the same profile.
pub const CANONICAL_WORKER: usize = 0;

/// Profile global that toggles relation-level routing metadata.
pub const USE_ROUTE_RELATIONS: &str = "use_route_relations";

/// Environment variable overriding the number of per-worker scripting states.
pub const WORKERS_ENV: &str = "EXTRACTOR_WORKERS";
