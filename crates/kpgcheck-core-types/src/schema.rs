//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical across the checkers, the
//! comparator and the I/O layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Inputs
pub const FIELD_FILE: &str = "file";
pub const FIELD_PART: &str = "part";

// Collection sizes
pub const FIELD_RECORD_COUNT: &str = "record_count";
pub const FIELD_GROUP_COUNT: &str = "group_count";
pub const FIELD_DISCREPANCY_COUNT: &str = "discrepancy_count";
pub const FIELD_SYNONYM_GROUP_COUNT: &str = "synonym_group_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
