use clap::Parser;
use tracing::info;

use comment_checker::cli::{Cli, ColorChoice};
use comment_checker::counter::classify_with_extension;
use comment_checker::error::Result;
use comment_checker::language::SyntaxTable;
use comment_checker::output::{
    ColorMode, ErrorOutput, FileReport, JsonFormatter, OutputFormat, OutputFormatter,
    TextFormatter,
};
use comment_checker::{EXIT_SUCCESS, logging};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(color_choice_to_mode(cli.color)).print(&e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let report = classify_file(cli)?;
    info!(
        file = %report.path.display(),
        extension = %report.extension,
        "classification finished"
    );

    let output = format_output(cli, &report)?;
    if !cli.quiet {
        print!("{output}");
    }
    Ok(())
}

fn classify_file(cli: &Cli) -> Result<FileReport> {
    let table = SyntaxTable::load(&cli.table)?;
    let (extension, summary) = classify_with_extension(&table, &cli.file)?;

    Ok(FileReport {
        path: cli.file.clone(),
        extension: extension.to_string(),
        summary,
    })
}

fn format_output(cli: &Cli, report: &FileReport) -> Result<String> {
    match cli.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
    }
}
