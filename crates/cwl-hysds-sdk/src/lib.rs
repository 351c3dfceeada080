pub mod convert;
pub mod documents;
pub mod parse;
pub mod specs;

pub use convert::{
    build_io_spec, build_job_spec, convert, local_name, resolve_requirements, select_records,
    strip_registry, ConversionOutput, ConvertOptions, JobSpecOptions, RequirementOptions,
    SelectionError, DEFAULT_DISK_GB,
};
pub use documents::{
    CommandInputParameter, CommandStepRecord, DefaultValue, DocumentSet, ProcessRecord,
    Requirement, TypeExpression, WorkflowInputParameter, WorkflowRecord,
};
pub use parse::{
    document_base, load_document_set, load_document_set_with_options, DocumentFormat,
    LoadDocumentOptions, LoadedDocumentSet,
};
pub use specs::{
    DependencyImage, Destination, IoParam, IoSpecDocument, IoSpecTemplate, JobParam,
    JobSpecDocument, JobSpecTemplate, IO_SPEC_BUILT_KEYS, JOB_SPEC_BUILT_KEYS,
};
