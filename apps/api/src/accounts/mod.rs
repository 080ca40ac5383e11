// Account records. Roles and trial counters live here, server-side — the
// client never carries authoritative state.

pub mod handlers;
