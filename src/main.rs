use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payflow::application::driver::SessionDriver;
use payflow::config::FlowConfig;
use payflow::domain::ports::EventSourceBox;
use payflow::infrastructure::clock::SystemClock;
use payflow::infrastructure::recording_view::RecordingView;
use payflow::interfaces::csv::script_reader::ScriptReader;
use payflow::interfaces::csv::view_writer::ViewWriter;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Script of UI events (CSV: event,target,value)
    script: PathBuf,

    /// JSON file overriding the flow's defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log session transitions at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let config = match cli.config {
        Some(path) => FlowConfig::from_path(path).into_diagnostic()?,
        None => FlowConfig::default(),
    };

    let file = File::open(cli.script).into_diagnostic()?;
    let mut source: EventSourceBox = Box::new(ScriptReader::new(file).into_source());

    let driver = SessionDriver::new(config, RecordingView::new(), Box::new(SystemClock));
    let session = driver.run(source.as_mut()).await;

    // Final page state
    let stdout = io::stdout();
    let mut writer = ViewWriter::new(stdout.lock());
    writer.write_view(session.view()).into_diagnostic()?;

    Ok(())
}
