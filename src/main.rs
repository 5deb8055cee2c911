use clap::Parser;
use curiosity_lab::ScoringMode;
use curiosity_lab::core::config::{self, CliOverrides};
use curiosity_lab::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "curiosity-lab", about = "Multiple-choice quiz in your terminal")]
struct Args {
    /// TOML file of questions to use instead of the built-in set
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// How going back affects the score
    #[arg(short, long, value_enum)]
    scoring: Option<ScoringMode>,

    /// Title shown in the top bar
    #[arg(short, long)]
    title: Option<String>,

    /// Validate the question set, print a summary and exit
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to curiosity-lab.log in current directory.
    // The level is narrowed once config is resolved.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("curiosity-lab.log") {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Ignoring config file: {}", e);
            eprintln!("warning: {e}; using defaults");
            config::CurioConfig::default()
        }
    };
    let cli = CliOverrides {
        questions: args.questions,
        scoring: args.scoring,
        title: args.title,
    };
    let resolved = config::resolve(&file_config, &cli);
    log::set_max_level(resolved.log_level);
    log::info!("Curiosity Lab starting up: {:?}", resolved);

    // Bad question data is rejected before the terminal is touched.
    let questions = match resolved.question_set() {
        Ok(set) => set,
        Err(e) => {
            log::error!("Invalid question set: {}", e);
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        print!("{}", questions.check_report());
        return ExitCode::SUCCESS;
    }

    match tui::run(&resolved, questions) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
