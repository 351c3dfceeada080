use cwl_hysds_runner::Cli;
use clap::CommandFactory;

#[test]
fn help_smoke_names_the_binary() {
    let mut command = Cli::command();
    let help = command.render_long_help().to_string();
    assert!(help.contains("cwl-to-hysds"));
    assert!(help.contains("--output-dir"));
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
