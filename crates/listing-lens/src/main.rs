use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use listing_lens::{
    HeadlessGeometry, HeadlessListing, HostClick, LensSettings, ListingSession, Point, RecordingOverlay,
};

#[derive(Parser, Debug)]
#[command(name = "listing-lens", version, about)]
struct Args {
    /// Source file to render as a listing.
    file: PathBuf,

    /// Client coordinates of a click, as `X,Y`. Repeatable.
    #[arg(long = "click", value_parser = parse_point, required = true)]
    clicks: Vec<Point>,

    /// Hold the navigation modifier on every click.
    #[arg(long)]
    meta: bool,

    /// Treat every click as ending a text selection.
    #[arg(long)]
    selection: bool,

    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value_t = 8.0)]
    glyph_width: f64,

    #[arg(long, default_value_t = 18.0)]
    line_height: f64,

    #[arg(long, default_value_t = 40.0)]
    header_height: f64,

    #[arg(long, default_value_t = 20.0)]
    gutter_width: f64,

    /// Computed `padding-left` of code cells.
    #[arg(long, default_value = "10px")]
    padding_left: String,

    /// Print the overlay tree after each click.
    #[arg(long)]
    tree: bool,

    #[arg(long, short)]
    verbose: bool,

    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_point(value: &str) -> Result<Point, String> {
    let (x, y) = value.split_once(',').ok_or_else(|| format!("expected X,Y, got {value:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| format!("bad x in {value:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| format!("bad y in {value:?}: {e}"))?;
    Ok(Point::new(x, y))
}

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("listing-lens.log")
}

fn init_logging(
    args: &Args,
    settings: &LensSettings,
) -> PathBuf {
    let directive = if args.verbose {
        "listing_lens=debug"
    } else {
        settings.logging.level.directive()
    };
    let stderr_filter = EnvFilter::new(directive);
    let file_filter = EnvFilter::new(directive);

    let log_path = args.log_file.clone().unwrap_or_else(default_log_path);

    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or(std::path::Path::new(".")),
        log_path.file_name().unwrap_or(std::ffi::OsStr::new("listing-lens.log")),
    );

    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false).with_target(false).with_filter(file_filter);

    let stderr_layer =
        fmt::layer().with_writer(std::io::stderr).with_ansi(false).with_target(false).with_filter(stderr_filter);

    tracing_subscriber::registry().with(file_layer).with(stderr_layer).init();
    log_path
}

fn main() -> ExitCode {
    let args = Args::parse();

    let settings = match &args.config {
        Some(path) => match LensSettings::from_file(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("listing-lens: {}: {err}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => LensSettings::default(),
    };

    let log_path = init_logging(&args, &settings);
    info!("Starting listing-lens v{}", env!("CARGO_PKG_VERSION"));
    info!("Log file: {}", log_path.display());

    let text = match std::fs::read_to_string(&args.file) {
        Ok(text) => text,
        Err(err) => {
            error!("cannot read {}: {err}", args.file.display());
            return ExitCode::FAILURE;
        },
    };

    let geometry = HeadlessGeometry {
        glyph_width: args.glyph_width,
        line_height: args.line_height,
        header_height: args.header_height,
        gutter_cell_width: args.gutter_width,
        content_padding_left: args.padding_left.clone(),
        ..HeadlessGeometry::default()
    };
    let listing = HeadlessListing::new(&text, geometry);

    let mut session = match ListingSession::attach(listing, RecordingOverlay::new(), &settings) {
        Ok(session) => session,
        Err(err) => {
            error!("overlay not attached: {err}");
            return ExitCode::FAILURE;
        },
    };

    for client in &args.clicks {
        let report = session.on_click(HostClick {
            client: *client,
            modifier: args.meta,
            has_selection: args.selection,
        });
        let line = serde_json::json!({
            "click": client,
            "report": report,
            "highlights": session.layer().highlights(),
        });
        println!("{line}");
        if args.tree {
            print!("{}", session.layer().render_tree());
        }
    }

    ExitCode::SUCCESS
}
