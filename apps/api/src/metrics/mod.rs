// Per-app usage counters for the admin analytics dashboard.

pub mod handlers;
