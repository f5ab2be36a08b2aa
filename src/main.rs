use clap::Parser;
use log::error;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use word_tally::utils::resolve_path;
use word_tally::{
    load_exclusion_list, load_merge_file, tally_document, write_report, AnnotationMap,
    DocumentSource, Error, ExclusionSet, PageRegion, PdfDocument, PlainTextDocument, ReportRow,
    ScanOptions, WordCountMap,
};

#[derive(Parser, Debug)]
#[command(
    name = "word-tally",
    version,
    about = "Count distinct words in a paginated document"
)]
struct Cli {
    /// Input document: a PDF, or plain text with form-feed page breaks
    #[arg(required_unless_present = "input_file")]
    input: Option<PathBuf>,

    /// Input document, as a named option
    #[arg(short = 'I', long, value_name = "FILE", conflicts_with = "input")]
    input_file: Option<PathBuf>,

    /// Dump the extracted page text to this file
    #[arg(short = 'T', long)]
    text: Option<PathBuf>,

    /// Text file listing words to exclude from the output, one per line
    #[arg(short = 'F', long)]
    filter_file: Option<PathBuf>,

    /// Text file with the same row format as the output, merged into it
    #[arg(short = 'M', long)]
    merge_file: Option<PathBuf>,

    /// Keep word counts from the merge file instead of resetting them to 0
    #[arg(short = 'K', long)]
    keep_count: bool,

    /// First page to scan, zero-based
    #[arg(short = 'S', long)]
    start_page: Option<usize>,

    /// Number of pages to scan
    #[arg(short = 'C', long)]
    pages_count: Option<usize>,

    /// Crop start x
    #[arg(short = 'X', long)]
    x: Option<f64>,

    /// Crop start y
    #[arg(short = 'Y', long)]
    y: Option<f64>,

    /// Crop width
    #[arg(short = 'W', long)]
    width: Option<f64>,

    /// Crop height
    #[arg(short = 'H', long)]
    height: Option<f64>,
}

impl Cli {
    fn region(&self) -> Option<PageRegion> {
        if self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none() {
            return None;
        }
        Some(PageRegion {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        })
    }
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    // clap guarantees one of the two forms is present.
    let Some(input_arg) = cli.input_file.as_ref().or(cli.input.as_ref()) else {
        return Err(Error::DocumentOpen("no input file given".to_string()));
    };
    let input_file = resolve_path(input_arg);

    let exclusion = match &cli.filter_file {
        Some(path) => load_exclusion_list(resolve_path(path))?,
        None => ExclusionSet::new(),
    };

    let (seed_counts, annotations) = match &cli.merge_file {
        Some(path) => load_merge_file(resolve_path(path), cli.keep_count)?,
        None => (WordCountMap::new(), AnnotationMap::new()),
    };

    let mut text_dump = match &cli.text {
        Some(path) => Some(File::create(resolve_path(path))?),
        None => None,
    };

    let options = ScanOptions {
        start_page: cli.start_page,
        pages_count: cli.pages_count,
        region: cli.region(),
    };

    let rows = tally(
        &input_file,
        &options,
        &exclusion,
        seed_counts,
        annotations,
        text_dump.as_mut().map(|file| file as &mut dyn Write),
    )?;

    let stdout = io::stdout();
    write_report(&rows, &mut stdout.lock())?;

    Ok(())
}

/// Opens the input by extension and runs the pipeline over it. Anything
/// without a `.pdf` extension is treated as pre-extracted plain text.
fn tally(
    input_file: &Path,
    options: &ScanOptions,
    exclusion: &ExclusionSet,
    seed_counts: WordCountMap,
    annotations: AnnotationMap,
    text_dump: Option<&mut dyn Write>,
) -> Result<Vec<ReportRow>, Error> {
    let is_pdf = input_file
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("pdf"));

    let source: Box<dyn DocumentSource> = if is_pdf {
        Box::new(PdfDocument::open(input_file)?)
    } else {
        Box::new(PlainTextDocument::open(input_file)?)
    };

    tally_document(
        source.as_ref(),
        options,
        exclusion,
        seed_counts,
        annotations,
        text_dump,
    )
}
