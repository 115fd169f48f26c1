use remora_core::{LogEntry, LogSequence};
use remora_render::{render_graph, ConsoleSink, StderrConsole};
use std::io::Read;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Render(remora_render::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<remora_render::Error> for CliError {
    fn from(value: remora_render::Error) -> Self {
        Self::Render(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Directive,
    Svg,
    DataUrl,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    emit: bool,
    out: Option<String>,
}

fn usage() -> &'static str {
    "remora-cli\n\
\n\
USAGE:\n\
  remora-cli [directive] [--emit] [--out <path>] [<path>|-]\n\
  remora-cli svg [--out <path>] [<path>|-]\n\
  remora-cli data-url [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - Input is a JSON array of log entries, e.g.\n\
    [{\"id\":\"a1\",\"kind\":\"action\",\"name\":\"increment\"},\n\
     {\"id\":\"s1\",\"kind\":\"state\",\"name\":\"counter\",\"cause\":{\"entry\":\"a1\"}}]\n\
  - A cause of \"root\" marks the designated no-real-cause sentinel.\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - directive prints the console format string and style separated by a tab;\n\
    --emit writes it to stderr through the default console sink instead.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "directive" => args.command = Command::Directive,
            "svg" => args.command = Command::Svg,
            "data-url" => args.command = Command::DataUrl,
            "--emit" => args.emit = true,
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        Some("-") | None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_output(out: Option<&str>, text: &str) -> Result<(), CliError> {
    match out {
        Some(path) => std::fs::write(path, text)?,
        None => println!("{text}"),
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let entries: Vec<LogEntry> = serde_json::from_str(&text)?;
    let graph = render_graph(&LogSequence::new(entries));

    match args.command {
        Command::Directive => {
            let directive = graph.console_directive();
            if args.emit {
                let mut sink = StderrConsole;
                sink.write_styled(&directive.format, &directive.style)
                    .map_err(remora_render::Error::from)?;
            } else {
                write_output(
                    args.out.as_deref(),
                    &format!("{}\t{}", directive.format, directive.style),
                )?;
            }
        }
        Command::Svg => write_output(args.out.as_deref(), &graph.svg)?,
        Command::DataUrl => write_output(args.out.as_deref(), &graph.data_url())?,
    }

    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
