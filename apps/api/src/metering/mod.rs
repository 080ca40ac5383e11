// Paywall + usage metering. One reusable policy object configured per
// feature — not per-page copies, and never client-trusted counters.

pub mod handlers;
pub mod policy;
