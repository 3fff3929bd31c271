//! Standard exit codes (BSD sysexits.h compatible)

/// Data format error (malformed tree notation)
pub const DATAERR: i32 = 65;

/// Configuration error
pub const CONFIG: i32 = 78;
