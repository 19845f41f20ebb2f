//! Shared constants for fieldflux.
//!
//! Centralizes values that would otherwise be duplicated across crates.

/// Spatial reference system for all site geometries (longitude/latitude degrees).
pub const WGS84_SRID: i32 = 4326;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 8;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default HTTP port when neither `--port` nor `FIELDFLUX_PORT` is given.
pub const DEFAULT_HTTP_PORT: u16 = 5000;
