use clap::Parser;
use seatpick::OutputFormat;
use seatpick::core::config::{self, CliOverrides};
use seatpick::core::price::Price;
use seatpick::core::state::App;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seatpick", about = "Pick seats for an event and emit the booking form")]
struct Args {
    /// Event title shown in the title bar
    #[arg(short, long)]
    title: Option<String>,

    /// Number of seat rows to generate (1-26)
    #[arg(short, long)]
    rows: Option<u16>,

    /// Number of seats per row
    #[arg(short, long)]
    cols: Option<u16>,

    /// Comma-separated ids of seats that are already booked, e.g. "A2,B5"
    #[arg(short, long)]
    booked: Option<String>,

    /// Price of one seat, e.g. 12.50
    #[arg(short, long)]
    price: Option<Price>,

    /// Venue layout file to bind to instead of generating a grid
    #[arg(short, long, conflicts_with_all = ["rows", "cols"])]
    layout: Option<PathBuf>,

    /// Format of the booking form printed on exit
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        CliOverrides {
            title: args.title,
            rows: args.rows,
            cols: args.cols,
            booked: args.booked,
            price: args.price,
            layout: args.layout,
            format: args.format,
        }
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to seatpick.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("seatpick.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Seatpick starting up");

    let cli = CliOverrides::from(args);
    let resolved = config::load_config()
        .and_then(|file_config| config::resolve(&file_config, &cli))
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let format = resolved.format;
    let selector = config::build_selector(&resolved)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let app = App::from_config(selector, &resolved);

    match seatpick::tui::run(app)? {
        Some(form) => {
            let payload = form.encode(format)?;
            log::info!("Submitting booking form: {}", payload);
            println!("{payload}");
        }
        None => log::info!("No booking submitted"),
    }
    Ok(())
}
