use clap::Parser;
use itemsheet::cli;
use itemsheet::config::{ConvertConfig, DEFAULT_CSV_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_XLSX_FILE};
use itemsheet::error::SheetResult;
use itemsheet::source::SourcePreference;
use itemsheet::types::Schema;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "itemsheet")]
#[command(about = "Convert the item spreadsheet (CSV or XLSX) into items.json")]
#[command(long_about = "Itemsheet - item catalog spreadsheet to JSON

Reads CSV-itens.xlsx (if present and Excel support is built in) or
CSV-itens.csv, normalizes each row and REPLACES items.json with the result.
Nothing from the previous items.json is kept.

COLUMNS:
  nome          required
  width/height  integer, default 0
  color, img    text, default \"\"
  maxEstresse   integer, default 3   (extended schema)
  tipo, slot    text, default \"\"     (extended schema)

EXAMPLES:
  itemsheet                                 # Convert in the current directory
  itemsheet --data-dir public/data          # Convert next to the sheets
  itemsheet --schema base --source csv      # Five-field records from the CSV
  itemsheet -n                              # Print the JSON, write nothing")]
#[command(version)]
struct Cli {
    /// Directory holding CSV-itens.csv, CSV-itens.xlsx and items.json
    #[arg(long, env = "ITEMSHEET_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// CSV source (default: <data-dir>/CSV-itens.csv)
    #[arg(long, env = "ITEMSHEET_CSV")]
    csv: Option<PathBuf>,

    /// Excel source (default: <data-dir>/CSV-itens.xlsx)
    #[arg(long, env = "ITEMSHEET_XLSX")]
    xlsx: Option<PathBuf>,

    /// JSON destination (default: <data-dir>/items.json)
    #[arg(short, long, env = "ITEMSHEET_OUTPUT")]
    output: Option<PathBuf>,

    /// Record shape to write
    #[arg(short, long, value_enum, env = "ITEMSHEET_SCHEMA", default_value_t = Schema::Extended)]
    schema: Schema,

    /// Which sheet to read
    #[arg(long, value_enum, env = "ITEMSHEET_SOURCE", default_value_t = SourcePreference::Auto)]
    source: SourcePreference,

    /// Print the JSON instead of writing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show source, previous content and every converted item
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> (ConvertConfig, bool) {
        let mut config = ConvertConfig::in_dir(&self.data_dir)
            .with_schema(self.schema)
            .with_source(self.source)
            .with_dry_run(self.dry_run);
        config.csv_path = self.csv.unwrap_or_else(|| self.data_dir.join(DEFAULT_CSV_FILE));
        config.xlsx_path = self.xlsx.unwrap_or_else(|| self.data_dir.join(DEFAULT_XLSX_FILE));
        config.output_path = self
            .output
            .unwrap_or_else(|| self.data_dir.join(DEFAULT_OUTPUT_FILE));
        (config, self.verbose)
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "itemsheet=debug"
    } else {
        "itemsheet=warn"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn main() -> SheetResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (config, verbose) = cli.into_config();
    cli::convert(config, verbose)
}
