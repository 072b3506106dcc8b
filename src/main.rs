//! Quick Cook - CLI
//!
//! Recipe browser and guess-the-dish game with TUI and CLI modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use quick_cook::{
    commands::{
        ReplayConfig, list_meals, meal_timer, replay, run_countdown, run_simple, search_meals,
        show_meal, toggle_favorite,
    },
    config::{AppConfig, default_favorites_path},
    game::GameController,
    interactive::{App, run_tui},
    output::{print_cuisines, print_meal_detail, print_meal_list, print_replay_result},
    recipe::TimerKind,
};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "quick_cook",
    about = "African and Caribbean recipes, plus a guess-the-dish word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Recipe catalog JSON file (default: the built-in catalog)
    #[arg(long, global = true, env = "QUICK_COOK_CATALOG")]
    catalog: Option<PathBuf>,

    /// Favorites file (default: <data dir>/quick_cook/favorites.json)
    #[arg(long, global = true, env = "QUICK_COOK_FAVORITES")]
    favorites: Option<PathBuf>,

    /// Shuffle the order of the game's dishes
    #[arg(long, global = true)]
    shuffle: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Line-based game without TUI
    Simple,

    /// Play a scripted list of guesses and show what each one reveals
    Replay {
        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,

        /// Stop after the first won level instead of moving on
        #[arg(long)]
        no_advance: bool,
    },

    /// List every cuisine
    Cuisines,

    /// List meals, optionally for one cuisine
    List {
        /// Cuisine name, e.g. "nigerian"
        cuisine: Option<String>,

        /// Breakfast, Lunch, Dinner, Snack, Dessert or All
        #[arg(short = 't', long)]
        meal_type: Option<String>,
    },

    /// Search meal names and descriptions
    Search {
        query: String,
    },

    /// Show a meal's full recipe
    Show {
        name: String,
    },

    /// Toggle a meal as favorite
    Favorite {
        name: String,
    },

    /// List favorite meals
    Favorites,

    /// Run a prep (or cook) countdown for a meal
    Timer {
        name: String,

        /// Time the cooking instead of the prep
        #[arg(long)]
        cook: bool,
    },
}

impl Cli {
    fn config(&self) -> AppConfig {
        AppConfig {
            catalog_path: self.catalog.clone(),
            favorites_path: self
                .favorites
                .clone()
                .unwrap_or_else(default_favorites_path),
            shuffle: self.shuffle,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config),
        Commands::Simple => run_simple_command(&config),
        Commands::Replay {
            guesses,
            no_advance,
        } => run_replay_command(&config, guesses, no_advance),
        Commands::Cuisines => {
            print_cuisines(&config.load_catalog()?);
            Ok(())
        }
        Commands::List { cuisine, meal_type } => {
            run_list_command(&config, cuisine.as_deref(), meal_type.as_deref())
        }
        Commands::Search { query } => run_search_command(&config, &query),
        Commands::Show { name } => run_show_command(&config, &name),
        Commands::Favorite { name } => run_favorite_command(&config, &name),
        Commands::Favorites => run_favorites_command(&config),
        Commands::Timer { name, cook } => run_timer_command(&config, &name, cook),
    }
}

fn run_play_command(config: &AppConfig) -> Result<()> {
    let app = App::new(config.playlist())?;
    run_tui(app)
}

fn run_simple_command(config: &AppConfig) -> Result<()> {
    let mut controller = GameController::new(config.playlist())?;
    run_simple(&mut controller, io::stdin().lock(), io::stdout().lock())
}

fn run_replay_command(config: &AppConfig, guesses: Vec<String>, no_advance: bool) -> Result<()> {
    let mut replay_config = ReplayConfig::new(guesses);
    replay_config.auto_advance = !no_advance;

    let result = replay(replay_config, config.playlist())?;
    print_replay_result(&result);
    Ok(())
}

fn run_list_command(
    config: &AppConfig,
    cuisine: Option<&str>,
    meal_type: Option<&str>,
) -> Result<()> {
    let catalog = config.load_catalog()?;
    let favorites = config.open_favorites()?;
    let meals = list_meals(&catalog, cuisine, meal_type)?;

    let title = match (cuisine.and_then(|name| catalog.find_cuisine(name)), meal_type) {
        (Some(found), Some(kind)) => format!("{} · {kind}", found.label),
        (Some(found), None) => found.label.clone(),
        (None, Some(kind)) => format!("All cuisines · {kind}"),
        (None, None) => "All cuisines".to_string(),
    };
    print_meal_list(&title, &meals, |name| favorites.is_favorite(name));
    Ok(())
}

fn run_search_command(config: &AppConfig, query: &str) -> Result<()> {
    let catalog = config.load_catalog()?;
    let favorites = config.open_favorites()?;
    let meals = search_meals(&catalog, query)?;

    print_meal_list(&format!("Results for '{query}'"), &meals, |name| {
        favorites.is_favorite(name)
    });
    Ok(())
}

fn run_show_command(config: &AppConfig, name: &str) -> Result<()> {
    let catalog = config.load_catalog()?;
    let favorites = config.open_favorites()?;
    let meal = show_meal(&catalog, name)?;

    print_meal_detail(meal, favorites.is_favorite(&meal.name));
    Ok(())
}

fn run_favorite_command(config: &AppConfig, name: &str) -> Result<()> {
    let catalog = config.load_catalog()?;
    let mut favorites = config.open_favorites()?;
    let (meal, now_favorite) = toggle_favorite(&catalog, &mut favorites, name)?;

    if now_favorite {
        println!("★ Added {} to favorites", meal.name);
    } else {
        println!("☆ Removed {} from favorites", meal.name);
    }
    info!(path = %config.favorites_path.display(), "favorites saved");
    Ok(())
}

fn run_favorites_command(config: &AppConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    let favorites = config.open_favorites()?;
    let meals = catalog.favorites(&favorites);

    // Names saved by an older catalog that no longer match any meal
    let missing = favorites.len().saturating_sub(meals.len());
    print_meal_list("Favorites", &meals, |_| true);
    if missing > 0 {
        println!("  ({missing} saved favorites are not in this catalog)\n");
    }
    Ok(())
}

fn run_timer_command(config: &AppConfig, name: &str, cook: bool) -> Result<()> {
    let catalog = config.load_catalog()?;
    let meal = show_meal(&catalog, name)?;
    let kind = if cook { TimerKind::Cook } else { TimerKind::Prep };

    let timer = meal_timer(meal, kind)?;
    run_countdown(&meal.name, timer)
}
