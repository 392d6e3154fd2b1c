use clap::{Args as ClapArgs, Parser, Subcommand};
use classlink_common::*;
use classlink_formatter::Formatter;
use classlink_parser::Parser as LinkParser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod console;

/// classlink - Deep links for browsing classes, reviews and your account

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing classlink.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a link into its navigation stack
    Parse {
        /// Path or URL to decode (e.g. "/explore/UY/CS/101/review?enjoyment=4")
        link: String,
        /// Print the navigation state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Encode a screen into a link
    Stringify {
        /// Explore, Search or Me
        section: Section,
        /// Screen name (e.g. Detail, Review, SignInSignUp)
        screen: Screen,
        #[command(flatten)]
        params: ParamArgs,
        /// Prepend the configured base URL
        #[arg(long)]
        url: bool,
    },
}

#[derive(ClapArgs, Debug, Default)]
struct ParamArgs {
    #[arg(long)]
    school: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    number: Option<String>,
    /// Term code and year (e.g. fa23)
    #[arg(long)]
    semester: Option<Semester>,
    #[arg(long)]
    query: Option<String>,
    /// Open the sign-up form instead of sign-in
    #[arg(long)]
    sign_up: bool,
    /// Account list a class was opened from (starred or reviewed)
    #[arg(long)]
    list: Option<ClassList>,
    #[arg(long)]
    enjoyment: Option<Rating>,
    #[arg(long)]
    difficulty: Option<Rating>,
    #[arg(long)]
    workload: Option<Rating>,
    #[arg(long)]
    value: Option<Rating>,
    #[arg(long)]
    instructor: Option<String>,
    #[arg(long)]
    comment: Option<String>,
}

impl ParamArgs {
    fn into_params(self) -> ScreenParams {
        let review = ReviewDraft {
            enjoyment: self.enjoyment,
            difficulty: self.difficulty,
            workload: self.workload,
            value: self.value,
            instructor: self.instructor,
            comment: self.comment,
            semester: None,
        };

        ScreenParams {
            school: self.school,
            department: self.department,
            number: self.number,
            semester: self.semester,
            query: self.query,
            is_signing_up: self.sign_up,
            review: Some(review).filter(|draft| !draft.is_empty()),
            list: self.list,
        }
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Args::parse();

    let config = match &cli.config {
        Some(dir) => match LinkConfig::load(dir) {
            Ok(config) => {
                debug!(?config, "loaded config");
                config
            }
            Err(err) => {
                eprintln!("Error loading config: {}", err);
                std::process::exit(1);
            }
        },
        None => LinkConfig::default(),
    };

    match cli.command {
        Commands::Parse { link, json } => {
            let state = LinkParser::with_config(config).parse(&link);

            if json {
                match serde_json::to_string_pretty(&state) {
                    Ok(json) => println!("{}", json),
                    Err(err) => {
                        eprintln!("Error serializing state: {}", err);
                        std::process::exit(1);
                    }
                }
            } else {
                println!("{}", console::render_state(&state));
            }
        }
        Commands::Stringify {
            section,
            screen,
            params,
            url,
        } => {
            let formatter = Formatter::with_config(config);

            match formatter.format(section, screen, &params.into_params()) {
                Ok(path) if url => println!("{}", formatter.to_url(&path)),
                Ok(path) => println!("{}", path),
                Err(err) => {
                    eprintln!("ERROR: {}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}
