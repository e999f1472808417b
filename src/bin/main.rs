use clap::{Parser, ValueEnum};
use crossterm::style::{StyledContent, Stylize};
use newmm_core::core::tcc::clusters;
use newmm_core::persistence::save_snapshot;
use newmm_core::{DictionaryCache, DictionarySource, SegmentOptions, Token, TokenKind, Tokenizer};
use std::io::{self, BufRead, BufWriter, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Thai word segmentation with dictionary maximal matching.
#[derive(Debug, Parser)]
#[command(name = "newmm", version, about)]
struct Args {
    /// Text to segment; reads stdin line by line when omitted
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Newline-separated word list to use instead of the built-in dictionary
    #[arg(short, long, value_name = "PATH", env = "THAI_NEWMM_DICT")]
    dict: Option<PathBuf>,

    /// Binary dictionary snapshot written by --compile
    #[arg(short, long, value_name = "PATH", conflicts_with = "dict")]
    snapshot: Option<PathBuf>,

    /// Write a snapshot of the selected dictionary to OUT and exit
    #[arg(long, value_name = "OUT")]
    compile: Option<PathBuf>,

    /// Drop whitespace tokens from the output
    #[arg(long)]
    no_whitespace: bool,

    /// Merge runs of unknown clusters into one token
    #[arg(long)]
    join_unknown: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Separator printed between tokens in text output
    #[arg(long, default_value = "|")]
    separator: String,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Tokens joined by the separator, coloured by kind on a terminal
    Text,
    /// One JSON array of {text, kind} objects per input line
    Json,
    /// Thai character clusters instead of words
    Clusters,
}

impl Args {
    fn source(&self) -> DictionarySource {
        match (&self.snapshot, &self.dict) {
            (Some(path), _) => DictionarySource::Snapshot(path.clone()),
            (None, Some(path)) => DictionarySource::WordList(path.clone()),
            (None, None) => DictionarySource::Default,
        }
    }

    fn options(&self) -> SegmentOptions {
        SegmentOptions {
            keep_whitespace: !self.no_whitespace,
            join_unknown: self.join_unknown,
        }
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn colourise(token: &Token) -> StyledContent<&str> {
    let text = token.text.as_str();
    match token.kind {
        TokenKind::ThaiText => text.green(),
        TokenKind::Number => text.cyan(),
        TokenKind::LatinRun => text.blue(),
        TokenKind::PunctuationRun => text.yellow(),
        TokenKind::WhitespaceRun => text.dark_grey(),
        TokenKind::Other => text.magenta(),
    }
}

struct Printer {
    format: OutputFormat,
    separator: String,
    colour: bool,
}

impl Printer {
    fn emit(&self, out: &mut impl Write, tokenizer: &Tokenizer, text: &str) -> newmm_core::Result<()> {
        match self.format {
            OutputFormat::Clusters => {
                writeln!(out, "{}", clusters(text).join(&self.separator))?;
                Ok(())
            }
            _ => self.print(out, &tokenizer.segment(text)),
        }
    }

    fn print(&self, out: &mut impl Write, tokens: &[Token]) -> newmm_core::Result<()> {
        match self.format {
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, tokens).map_err(io::Error::from)?;
                writeln!(out)?;
            }
            OutputFormat::Text | OutputFormat::Clusters => {
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        write!(out, "{}", self.separator)?;
                    }
                    if self.colour {
                        write!(out, "{}", colourise(token))?;
                    } else {
                        write!(out, "{}", token.text)?;
                    }
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

fn run(args: Args) -> newmm_core::Result<()> {
    let source = args.source();
    log::info!("using dictionary {:?}", source);

    if let Some(out) = &args.compile {
        let index = DictionaryCache::global().get_or_load(&source)?;
        save_snapshot(&index, out)?;
        log::info!("wrote {} words to {}", index.len(), out.display());
        return Ok(());
    }

    let tokenizer = Tokenizer::from_source(&source, args.options())?;
    let stdout = io::stdout();
    let printer = Printer {
        format: args.format,
        separator: args.separator.clone(),
        colour: stdout.is_terminal(),
    };
    let mut out = BufWriter::new(stdout.lock());

    if args.text.is_empty() {
        for line in io::stdin().lock().lines() {
            printer.emit(&mut out, &tokenizer, &line?)?;
        }
    } else {
        for text in &args.text {
            printer.emit(&mut out, &tokenizer, text)?;
        }
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("newmm: {}", e);
            ExitCode::FAILURE
        }
    }
}
