//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination
pub const OK: i32 = 0;

/// `has`: at least one key does not resolve
pub const MISSING: i32 = 1;

/// Command line usage error
pub const USAGE: i32 = 64;

/// Document could not be decoded or encoded
pub const DATAERR: i32 = 65;

/// Document file does not exist
pub const NOINPUT: i32 = 66;

/// Can't create output file
pub const CANTCREAT: i32 = 73;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
