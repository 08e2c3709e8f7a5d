use std::{env, io, process};

use benchscale::{
    AnalysisConfig, AnalysisReport, BenchScaleError,
    client::{CommandLineConfig, OutputFormat},
    ingest::load_csv,
    render::{JsonDirRenderer, TextRenderer},
    run_analysis,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("benchscale=info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", CommandLineConfig::help());
        return;
    }
    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    let cli = match CommandLineConfig::from_args(&arg_refs) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(2);
        }
    };

    let config = match AnalysisConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config: {err}");
            process::exit(2);
        }
    };

    let store = match load_csv(&cli.input) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let report = match run_analysis(&store, &config) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("analysis failed: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run_command(&cli, &report) {
        eprintln!("command failed: {err}");
        process::exit(1);
    }
}

fn run_command(cli: &CommandLineConfig, report: &AnalysisReport) -> Result<(), BenchScaleError> {
    match cli.command.as_str() {
        "summary" => {
            println!("samples={} replaced_times={}", report.samples, report.replaced_times);
            for line in report.summary_lines() {
                println!("{line}");
            }
            Ok(())
        }
        "analyze" => render(cli, report),
        other => {
            println!("unknown command {other}, defaulting to analyze");
            render(cli, report)
        }
    }
}

fn render(cli: &CommandLineConfig, report: &AnalysisReport) -> Result<(), BenchScaleError> {
    match cli.format {
        OutputFormat::Table => {
            let stdout = io::stdout();
            let mut renderer = TextRenderer::new(stdout.lock());
            report.render(&mut renderer)?;
        }
        OutputFormat::Json => {
            let mut renderer = JsonDirRenderer::new(&cli.output);
            let count = report.render(&mut renderer)?;
            println!("{count} tables written to {}", cli.output.display());
        }
    }
    Ok(())
}
