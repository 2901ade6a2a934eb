/// CSV export of per-hour results.
pub mod export;
