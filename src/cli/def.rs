use clap::Parser;
use yaml_stream::ReadMode;

/// Print one document of a multi-document YAML stream
#[derive(Parser)]
#[command(author, about, long_about=None, disable_version_flag(true))]
pub struct Args {
    /// force color mode (defaults to check tty)
    #[arg(long)]
    pub color: bool,

    /// force no-color mode (defaults to check tty)
    #[arg(long)]
    pub no_color: bool,

    /// display version and quit
    #[arg(short = 'V', long = "version")]
    pub version: bool,

    /// prepend time to each log line
    #[arg(long)]
    pub log_time: bool,

    /// Turn general verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configure component wise logging (COMPONENT[=LEVEL])
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub log: Option<Vec<String>>,

    /// quiet index errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file containing one or more YAML documents
    #[arg(short, long, alias = "file", required_unless_present = "version")]
    pub filename: Option<String>,

    /// Index of the document to print
    #[arg(short, long, default_value_t = 0)]
    pub index: usize,

    /// Print every document instead of a single one
    #[arg(short, long, conflicts_with_all = ["index", "count"])]
    pub all: bool,

    /// Print the number of documents and quit
    #[arg(short, long)]
    pub count: bool,

    /// Print the original bytes of the selected document
    #[arg(short, long)]
    pub raw: bool,

    /// How malformed documents are handled (strict or lenient)
    #[arg(short, long, default_value = "strict")]
    pub mode: ReadMode,
}
