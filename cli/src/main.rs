use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use serde_json::Value;

#[derive(Parser, Debug)]
#[command(
    name = "cfn-overrides",
    version,
    about = "Parse CloudFormation override inputs into canonical JSON"
)]
struct Args {
    /// Which override input to parse.
    #[arg(value_enum)]
    kind: Kind,

    /// The raw override string. Omit or use '-' to read from stdin.
    input: Option<String>,

    /// Output file path (prints to stdout if omitted).
    #[arg(short, long, value_name = "file")]
    output: Option<String>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Kind {
    Tags,
    Parameters,
    Arns,
    Capabilities,
    String,
    Number,
    Url,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ERROR  {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let input = read_input(args.input.as_deref())?;
    let value = parse_input(args.kind, &input)?;

    let indent = if args.compact { 0 } else { 2 };
    let output_target = OutputTarget::from_arg(args.output.as_deref());

    with_output_writer(output_target.path(), |writer| {
        write_json(writer, &value, indent)
    })?;
    if let OutputTarget::File(path) = &output_target {
        println!("✔ Wrote {path}");
    }
    Ok(())
}

fn parse_input(kind: Kind, input: &str) -> Result<Value, Box<dyn Error>> {
    let value = match kind {
        Kind::Tags => serde_json::to_value(cfn_overrides::parse_tags(input))?,
        Kind::Parameters => serde_json::to_value(cfn_overrides::parse_parameters(input))?,
        Kind::Arns => serde_json::to_value(cfn_overrides::parse_arns(input))?,
        Kind::Capabilities => serde_json::to_value(cfn_overrides::parse_capabilities(input))?,
        Kind::String => serde_json::to_value(cfn_overrides::parse_string(input))?,
        Kind::Number => serde_json::to_value(cfn_overrides::parse_number(input))?,
        Kind::Url => Value::Bool(cfn_overrides::is_url(input)),
    };
    Ok(value)
}

fn read_input(input: Option<&str>) -> Result<String, Box<dyn Error>> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            // The override text itself never ends with the newline a pipe appends.
            if buf.ends_with('\n') {
                buf.pop();
                if buf.ends_with('\r') {
                    buf.pop();
                }
            }
            Ok(buf)
        }
        Some(literal) => Ok(literal.to_string()),
    }
}

#[derive(Clone, Debug)]
enum OutputTarget {
    Stdout,
    File(String),
}

impl OutputTarget {
    fn from_arg(output: Option<&str>) -> Self {
        match output {
            Some(path) if path != "-" => OutputTarget::File(path.to_string()),
            _ => OutputTarget::Stdout,
        }
    }

    fn path(&self) -> Option<&str> {
        match self {
            OutputTarget::Stdout => None,
            OutputTarget::File(path) => Some(path.as_str()),
        }
    }
}

fn with_output_writer<F>(path: Option<&str>, f: F) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&mut dyn Write) -> Result<(), Box<dyn Error>>,
{
    match path {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            f(&mut file)
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            f(&mut handle)
        }
    }
}

fn write_json(writer: &mut dyn Write, value: &Value, indent: usize) -> Result<(), Box<dyn Error>> {
    if indent == 0 {
        serde_json::to_writer(writer, value)?;
        return Ok(());
    }

    let indent_bytes = vec![b' '; indent];
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}
