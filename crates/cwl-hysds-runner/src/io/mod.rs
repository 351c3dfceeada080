mod read_document;
mod write_specs;

pub use read_document::{
    read_document_source, resolve_document_source, DocumentSource, LoadedSourceText,
};
pub use write_specs::{
    write_spec_files, SpecOutputPaths, SpecWriteError, IO_SPEC_FILE_PREFIX, JOB_SPEC_FILE_PREFIX,
};
