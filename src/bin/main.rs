use clap::Parser;
use convert_core::persistence::write_atomic;
use convert_core::trace_init::init_tracing;
use convert_core::{Converter, ConverterConfig, Script};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "akshar-convert",
    version,
    about = "Convert between romanized Nepali, Unicode Devanagari and Preeti"
)]
struct Cli {
    /// Script of the input: english, unicode or preeti
    #[arg(short, long, default_value = "english")]
    from: Script,

    /// Script of the output
    #[arg(short, long, default_value = "unicode")]
    to: Script,

    /// Read input from this file instead of the arguments or stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Write output to this file (replaced atomically)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with phonetic key overrides
    #[arg(long)]
    mappings: Option<PathBuf>,

    /// Print the assembled clusters of the input as JSON instead of converting
    #[arg(long)]
    analyze: bool,

    /// Text to convert; stdin is read when neither this nor --input is given
    text: Vec<String>,
}

fn read_input(cli: &Cli) -> io::Result<String> {
    if let Some(path) = &cli.input {
        return std::fs::read_to_string(path);
    }
    if !cli.text.is_empty() {
        return Ok(cli.text.join(" "));
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let converter = match &cli.mappings {
        Some(path) => Converter::with_config(&ConverterConfig::load(path)?)?,
        None => Converter::new(),
    };
    let text = read_input(&cli)?;

    let result = if cli.analyze {
        let clusters = converter.analyze(&text, cli.from);
        let mut json = serde_json::to_string_pretty(&clusters)?;
        json.push('\n');
        json
    } else {
        converter.convert(&text, cli.from, cli.to)
    };

    match &cli.output {
        Some(path) => write_atomic(path, &result)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            if cli.input.is_none() && !cli.text.is_empty() {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("akshar-convert: {e}");
            ExitCode::FAILURE
        }
    }
}
