mod cli;
mod config;
mod io;
mod logging;
mod run;

pub use cli::Cli;
pub use config::{
    load_converter_config, validate_converter_config, ConverterConfig, ConverterConfigError,
    CONVERTER_CONFIG_SCHEMA,
};
pub use io::{
    read_document_source, resolve_document_source, write_spec_files, DocumentSource,
    LoadedSourceText, SpecOutputPaths, SpecWriteError,
};
pub use logging::{init_logging, log_issues};
pub use run::{execute_convert, execute_convert_in, ConvertReport, RunnerError};
