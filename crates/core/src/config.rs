//! Global configuration constants for streamdex.
//!
//! Protocol literals, limits and server defaults live here. These are
//! compile-time constants; runtime configuration is handled via CLI arguments
//! in the server's `main.rs`.

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 4523;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Tag assumed when a caller supplies none.
pub const DEFAULT_TAG: &str = "public";

/// Reserved tag granting every path regardless of the tag definitions.
pub const ALL_TAG: &str = "all";

/// Storage-internal identifier field. Never leaves the process.
pub const STORE_ID_FIELD: &str = "_id";

/// Field holding the hierarchical, `/`-delimited stream path.
pub const PATH_FIELD: &str = "Path";

/// Field holding the stable stream identifier.
pub const UUID_FIELD: &str = "uuid";

/// Sub-object holding stream metadata.
pub const METADATA_FIELD: &str = "Metadata";

/// Key of the ingest source name inside [`METADATA_FIELD`].
pub const SOURCE_NAME_FIELD: &str = "SourceName";

/// Body returned by the liveness probe (`GET /`).
pub const LIVENESS_BODY: &str = "GET request received";

/// Body returned with a 400 when the query body is empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Request was empty";

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Maximum HTTP request body size in bytes (1 MB). Queries are one line of text.
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;
