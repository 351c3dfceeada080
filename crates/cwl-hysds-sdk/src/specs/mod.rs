//! Target documents consumed by the job-execution platform.
//!
//! The `*Template` types hold the fixed platform fields. Builders take a
//! template by reference and clone it into each new document, so a template
//! shared across conversions is never written to.

mod io_spec;
mod job_spec;

pub use io_spec::{IoParam, IoSpecDocument, IoSpecTemplate, IO_SPEC_BUILT_KEYS, SUBMITTER_SOURCE};
pub use job_spec::{
    DependencyImage, Destination, JobParam, JobSpecDocument, JobSpecTemplate, JOB_SPEC_BUILT_KEYS,
};

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
