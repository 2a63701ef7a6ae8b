//! Squad CLI — browse the roster and manage the saved squad.
//!
//! Commands:
//! - `players` — list players, optionally filtered by name/nationality/position/club
//! - `options` — list the distinct values of a dropdown field
//! - `show` — full detail for one player
//! - `add` / `remove` — edit the saved squad
//! - `team` — print the saved squad as team cards
//! - `confirm` — finalize the squad

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use squad_core::filter::{self, Criteria};
use squad_core::view;
use squad_core::{
    AppConfig, FileStore, Player, PlayerId, RosterField, RosterStore, SelectionManager,
};

#[derive(Parser)]
#[command(name = "squad", about = "Squad Builder CLI — pick an eleven-player team")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// Config file. Defaults to <config dir>/squad-builder/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Roster location: a JSON file path or an http(s) URL.
    #[arg(long, global = true)]
    roster: Option<String>,

    /// Directory holding the saved squad.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List players matching all given filters.
    Players {
        /// Case-insensitive substring of the player name.
        #[arg(long)]
        name: Option<String>,

        /// Exact nationality.
        #[arg(long)]
        nationality: Option<String>,

        /// Exact position.
        #[arg(long)]
        position: Option<String>,

        /// Exact club.
        #[arg(long)]
        club: Option<String>,
    },
    /// List the distinct values of a field: nationality, position or club.
    Options {
        field: RosterField,
    },
    /// Show a player's detail card.
    Show {
        id: String,
    },
    /// Add a player to the saved squad.
    Add {
        id: String,
    },
    /// Remove the player in a squad slot (1-based, as printed by `team`).
    Remove {
        slot: usize,
    },
    /// Print the saved squad.
    Team,
    /// Finalize the saved squad.
    Confirm,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli.global)?;
    init_logging(&config.log_level);

    match cli.command {
        Commands::Players {
            name,
            nationality,
            position,
            club,
        } => {
            let criteria = Criteria {
                name: name.unwrap_or_default(),
                nationality,
                position,
                club,
            };
            run_players(&config, &criteria)
        }
        Commands::Options { field } => run_options(&config, field),
        Commands::Show { id } => run_show(&config, &PlayerId::new(id)),
        Commands::Add { id } => run_add(&config, &PlayerId::new(id)),
        Commands::Remove { slot } => run_remove(&config, slot),
        Commands::Team => run_team(&config),
        Commands::Confirm => run_confirm(&config),
    }
}

/// Config file values, overridden by command-line flags.
fn resolve_config(args: &GlobalArgs) -> Result<AppConfig> {
    let mut config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    if let Some(roster) = &args.roster {
        config.roster = roster.clone();
    }
    if let Some(dir) = &args.state_dir {
        config.state_dir = Some(dir.clone());
    }
    Ok(config)
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_roster(config: &AppConfig) -> Result<RosterStore> {
    let source = config.roster_source();
    RosterStore::load(&source).with_context(|| format!("Error loading players from {source}"))
}

fn open_squad(config: &AppConfig) -> SelectionManager<FileStore> {
    SelectionManager::restored(FileStore::new(config.state_dir()))
}

fn run_players(config: &AppConfig, criteria: &Criteria) -> Result<()> {
    let roster = load_roster(config)?;
    let matches = filter::apply(roster.players(), criteria);

    if matches.is_empty() {
        println!("No players match.");
        return Ok(());
    }

    println!(
        "{:<6} {:<24} {:<12} {:<6} {:<20} {:>3}",
        "Id", "Name", "Nationality", "Pos", "Club", "OVR"
    );
    println!("{}", "-".repeat(76));
    for p in &matches {
        println!(
            "{:<6} {:<24} {:<12} {:<6} {:<20} {:>3}",
            p.id, p.name, p.nationality, p.position, p.club, p.rating
        );
    }
    println!();
    println!("{} of {} players", matches.len(), roster.len());
    Ok(())
}

fn run_options(config: &AppConfig, field: RosterField) -> Result<()> {
    let roster = load_roster(config)?;
    println!("{}", field.all_label());
    for value in roster.distinct_values(field) {
        println!("  {value}");
    }
    Ok(())
}

fn run_show(config: &AppConfig, id: &PlayerId) -> Result<()> {
    let roster = load_roster(config)?;
    let Some(player) = roster.get(id) else {
        bail!("no player with id '{id}'");
    };
    print_detail(player);
    Ok(())
}

fn run_add(config: &AppConfig, id: &PlayerId) -> Result<()> {
    let roster = load_roster(config)?;
    let mut squad = open_squad(config);
    let name = add_player(&roster, &mut squad, id)?;
    println!("Added {name} ({}/{})", squad.len(), squad.capacity());
    Ok(())
}

fn run_remove(config: &AppConfig, slot: usize) -> Result<()> {
    let mut squad = open_squad(config);
    let removed = remove_slot(&mut squad, slot)?;
    println!(
        "Removed {} ({}/{})",
        removed.name,
        squad.len(),
        squad.capacity()
    );
    Ok(())
}

fn run_team(config: &AppConfig) -> Result<()> {
    let squad = open_squad(config);
    println!("Saved in: {}", squad.store().dir().display());
    if squad.is_empty() {
        println!("Squad is empty.");
        return Ok(());
    }

    println!("Squad {}/{}", squad.len(), squad.capacity());
    println!();
    for card in view::team_cards(squad.players()) {
        let badges: Vec<String> = card
            .left
            .iter()
            .chain(card.right.iter())
            .map(|b| format!("{} {:>2}", b.label, b.value))
            .collect();
        println!(
            "{:>2}. {:<24} {:>3} {:<4} {}",
            card.slot + 1,
            card.name,
            card.rating,
            card.position,
            badges.join("  ")
        );
    }
    Ok(())
}

fn run_confirm(config: &AppConfig) -> Result<()> {
    let squad = open_squad(config);
    let done = squad.confirm()?;
    println!("{done}");
    Ok(())
}

/// Add `id` from `roster`; returns the player's name.
fn add_player(
    roster: &RosterStore,
    squad: &mut SelectionManager<FileStore>,
    id: &PlayerId,
) -> Result<String> {
    let Some(player) = roster.get(id).cloned() else {
        bail!("no player with id '{id}'");
    };
    let name = player.name.clone();
    squad.add(player)?;
    Ok(name)
}

/// Remove by 1-based slot number.
fn remove_slot(squad: &mut SelectionManager<FileStore>, slot: usize) -> Result<Player> {
    if slot == 0 {
        bail!("slots are numbered from 1");
    }
    Ok(squad.remove_at(slot - 1)?)
}

fn print_detail(player: &Player) {
    let detail = view::detail(player);
    println!("{} ({})", detail.name, detail.id);
    println!("  {}", detail.club_line());
    println!("  {:<12}{}", "Nationality", detail.nationality);
    println!("  {:<12}{}", "Photo", detail.photo);
    println!();
    for bar in &detail.stats {
        let filled = bar.filled(20) as usize;
        println!(
            "  {:<12}{:>3} {}{}",
            bar.label,
            bar.value,
            "#".repeat(filled),
            ".".repeat(20 - filled)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn roster() -> RosterStore {
        RosterStore::from_json(
            r#"{"players": [
                {"id": 1, "name": "Alice", "nationality": "FR", "club": "Lyon", "position": "GK",
                 "rating": 84, "pace": 50, "shooting": 20, "passing": 60, "dribbling": 40,
                 "defending": 30, "physical": 70},
                {"id": 2, "name": "Bob", "nationality": "ES", "club": "Betis", "position": "ST",
                 "rating": 81, "pace": 85, "shooting": 83, "passing": 70, "dribbling": 80,
                 "defending": 35, "physical": 72}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = Cli::try_parse_from(["squad", "team", "--state-dir", "/tmp/s"]).unwrap();
        assert_eq!(cli.global.state_dir, Some(PathBuf::from("/tmp/s")));
        assert!(matches!(cli.command, Commands::Team));
    }

    #[test]
    fn options_field_parses_case_insensitively() {
        let cli = Cli::try_parse_from(["squad", "options", "Club"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Options {
                field: RosterField::Club
            }
        ));
        assert!(Cli::try_parse_from(["squad", "options", "shirt"]).is_err());
    }

    #[test]
    fn squad_opens_in_configured_state_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            state_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let squad = open_squad(&config);
        assert_eq!(squad.store().dir(), dir.path());
    }

    #[test]
    fn add_then_remove_persists_between_runs() {
        let dir = tempfile::tempdir().unwrap();
        let roster = roster();

        let mut squad = SelectionManager::restored(FileStore::new(dir.path()));
        assert_eq!(add_player(&roster, &mut squad, &"2".into()).unwrap(), "Bob");
        add_player(&roster, &mut squad, &"1".into()).unwrap();

        // Next invocation sees the saved squad.
        let mut squad = SelectionManager::restored(FileStore::new(dir.path()));
        assert_eq!(squad.ids(), vec![PlayerId::new("2"), PlayerId::new("1")]);

        let removed = remove_slot(&mut squad, 1).unwrap();
        assert_eq!(removed.name, "Bob");
        let squad = SelectionManager::restored(FileStore::new(dir.path()));
        assert_eq!(squad.ids(), vec![PlayerId::new("1")]);
    }

    #[test]
    fn duplicate_add_reports_message() {
        let dir = tempfile::tempdir().unwrap();
        let roster = roster();
        let mut squad = SelectionManager::restored(FileStore::new(dir.path()));
        add_player(&roster, &mut squad, &"1".into()).unwrap();
        let err = add_player(&roster, &mut squad, &"1".into()).unwrap_err();
        assert_eq!(err.to_string(), "This player is already in your team!");
    }

    #[test]
    fn unknown_id_and_slot_zero_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut squad = SelectionManager::restored(FileStore::new(dir.path()));
        assert!(add_player(&roster(), &mut squad, &"99".into()).is_err());
        assert!(remove_slot(&mut squad, 0).is_err());
        assert!(remove_slot(&mut squad, 1).is_err());
    }
}
