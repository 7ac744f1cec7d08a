mod logging;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use scenematch_core::config::AppConfig;
use scenematch_core::error::SceneError;
use scenematch_core::matcher::SceneMatcher;
use scenematch_core::models::{Episode, Show};
use scenematch_core::scene::{self, ExtraSearchType, Segment};
use scenematch_core::storage::Storage;

#[derive(Parser, Debug)]
#[command(name = "scenematch", version, about, long_about = None)]
struct Args {
    /// Database file (defaults to the platform data directory)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every name variant of a show
    Names {
        name: String,
        #[arg(long, default_value_t = 0)]
        id: i64,
        #[arg(long)]
        regional: Option<String>,
    },
    /// Print search strings for a stored show's episode
    Episode {
        #[arg(long)]
        show_id: i64,
        #[arg(long)]
        season: u32,
        #[arg(long)]
        episode: u32,
    },
    /// Print search strings for a season, or a date prefix of an air-by-date show
    Season {
        #[arg(long)]
        show_id: i64,
        segment: String,
        /// Provider query style (overrides the config)
        #[arg(long)]
        extra: Option<ExtraSearchType>,
    },
    /// Check whether search results belong to a stored show
    Check {
        #[arg(long)]
        show_id: i64,
        #[arg(required = true)]
        results: Vec<String>,
    },
    /// Check release names against the bad-release filters
    Filter {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Parse release names
    Parse {
        #[arg(required = true)]
        names: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Store a show
    AddShow {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        regional: Option<String>,
        #[arg(long)]
        air_by_date: bool,
    },
    /// Store an episode of a stored show
    AddEpisode {
        #[arg(long)]
        show_id: i64,
        #[arg(long)]
        season: u32,
        #[arg(long)]
        episode: u32,
        /// Broadcast date, YYYY-MM-DD
        #[arg(long)]
        airdate: Option<NaiveDate>,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_dir = Some(config.logging.directory.trim())
        .filter(|d| !d.is_empty())
        .map(PathBuf::from);
    let _guard = logging::init(&config.logging.level, args.verbose, log_dir.as_deref());

    match run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig, SceneError> {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

fn open_storage(path: Option<&Path>) -> Result<Storage, SceneError> {
    match path {
        Some(path) => Storage::open(path),
        None => Storage::open(&AppConfig::ensure_db_path()?),
    }
}

fn run(args: Args, config: &AppConfig) -> Result<(), SceneError> {
    let matcher = SceneMatcher::from_config(config)?;

    match args.command {
        Commands::Names { name, id, regional } => {
            let mut show = Show::new(id, name);
            if let Some(regional) = regional {
                show = show.with_regional_name(regional);
            }

            println!("Show names:");
            for name in matcher.show_names(&show) {
                println!("  {name}");
            }
            println!("Search names:");
            for name in matcher.show_search_strings(&show) {
                println!("  {name}");
            }
            println!("Normal names:");
            for name in scene::scene_to_normal_show_names(&show.name) {
                println!("  {name}");
            }
        }

        Commands::Episode {
            show_id,
            season,
            episode,
        } => {
            let db = open_storage(args.db.as_deref())?;
            let episode = match db.get_episode(show_id, season, episode)? {
                Some(stored) => stored,
                None => Episode::new(db.require_show(show_id)?, season, episode),
            };
            for line in matcher.episode_search_strings(&episode, &db)? {
                println!("{line}");
            }
        }

        Commands::Season {
            show_id,
            segment,
            extra,
        } => {
            let db = open_storage(args.db.as_deref())?;
            let show = db.require_show(show_id)?;
            let segment = parse_segment(&show, &segment);
            let matcher = match extra {
                Some(extra) => matcher.with_extra_search_type(Some(extra)),
                None => matcher,
            };
            for line in matcher.season_search_strings(&show, &segment, &db)? {
                println!("{line}");
            }
        }

        Commands::Check { show_id, results } => {
            let db = open_storage(args.db.as_deref())?;
            let show = db.require_show(show_id)?;
            for result in &results {
                let verdict = match (
                    scene::is_good_result(result, &show, matcher.exceptions(), true),
                    matcher.filter_release(result),
                ) {
                    (true, true) => "accept",
                    (false, _) => "reject (wrong show)",
                    (true, false) => "reject (bad release)",
                };
                println!("{verdict}\t{result}");
            }
        }

        Commands::Filter { names } => {
            for name in &names {
                let verdict = if matcher.filter_release(name) {
                    "accept"
                } else {
                    "reject"
                };
                println!("{verdict}\t{name}");
            }
        }

        Commands::Parse { names, json } => {
            for name in &names {
                match scenematch_parse::parse(name) {
                    Ok(result) if json => {
                        let line =
                            serde_json::to_string(&result).map_err(std::io::Error::from)?;
                        println!("{line}");
                    }
                    Ok(result) => {
                        println!("{name}");
                        println!("  series:  {}", result.series_name.as_deref().unwrap_or("-"));
                        if let Some(season) = result.season {
                            println!("  season:  {season}");
                        }
                        if !result.episodes.is_empty() {
                            println!("  episodes: {:?}", result.episodes);
                        }
                        if let Some(date) = result.air_date {
                            println!("  airdate: {date}");
                        }
                        println!("  extra:   {}", result.extra_info.as_deref().unwrap_or("-"));
                        println!("  group:   {}", result.release_group.as_deref().unwrap_or("-"));
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        Commands::AddShow {
            id,
            name,
            regional,
            air_by_date,
        } => {
            let db = open_storage(args.db.as_deref())?;
            let mut show = Show::new(id, name);
            if let Some(regional) = regional {
                show = show.with_regional_name(regional);
            }
            if air_by_date {
                show = show.with_air_by_date();
            }
            db.insert_show(&show)?;
            tracing::info!(id, name = %show.name, "Stored show");
        }

        Commands::AddEpisode {
            show_id,
            season,
            episode,
            airdate,
        } => {
            let db = open_storage(args.db.as_deref())?;
            let mut ep = Episode::new(db.require_show(show_id)?, season, episode);
            if let Some(airdate) = airdate {
                ep = ep.with_airdate(airdate);
            }
            db.insert_episode(&ep)?;
            tracing::info!(show_id, season, episode, "Stored episode");
        }
    }

    Ok(())
}

/// Air-by-date shows take the segment as a date prefix; others need a season
/// number, and anything else is searched literally.
fn parse_segment(show: &Show, raw: &str) -> Segment {
    if show.air_by_date {
        return Segment::AirDate(raw.to_string());
    }
    raw.parse()
        .map(Segment::Season)
        .unwrap_or_else(|_| Segment::AirDate(raw.to_string()))
}
