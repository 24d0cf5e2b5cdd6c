// Adapters layer: concrete outputs for report lines (stdout, in-memory).

pub mod reporter;
