//! sheet-forge CLI
//!
//! Command-line interface for converting design sheets into engine config JSON.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use sheet_forge_export::Settings;

use cli_types::{Cli, Commands, ConfigAction};
use commands::artifacts::{ArtifactOverrides, run_artifact_sets, run_artifacts};
use commands::config::{run_config_path, run_config_show};
use commands::monsters::{IntroColumnOverrides, run_intros, run_monsters};
use commands::text::{run_item_text, run_set_text};
use commands::upgrades::{UpgradeOverrides, run_upgrades};
use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Commands::Config {
        action: ConfigAction::Path,
    } = cli.command
    {
        run_config_path();
        return Ok(());
    }

    let (settings, source) = Settings::resolve(cli.config.as_deref())?;
    log::debug!("Settings from {source}");

    match cli.command {
        Commands::Artifacts {
            items,
            sets,
            out,
            struct_id,
            start_index,
            budget,
            no_budget,
            strict_budget,
        } => {
            let overrides = ArtifactOverrides {
                struct_id,
                start_index,
                budget,
                no_budget,
                strict_budget,
            };
            run_artifacts(&settings, &items, &sets, &out.output, &overrides)
        }
        Commands::ArtifactSets {
            sets,
            out,
            struct_id,
        } => run_artifact_sets(&settings, &sets, &out.output, struct_id),
        Commands::Monsters {
            input,
            out,
            struct_id,
            indent,
        } => run_monsters(&settings, &input, &out.output, struct_id, indent),
        Commands::Intros {
            input,
            out,
            struct_id,
            id_col,
            name_col,
            desc_col,
        } => {
            let columns = IntroColumnOverrides {
                id: id_col,
                name: name_col,
                description: desc_col,
            };
            run_intros(&settings, &input, &out.output, struct_id, columns)
        }
        Commands::Upgrades {
            input,
            out,
            outer_struct_id,
            inner_struct_id,
            alt_color,
            no_prefix_newline,
        } => {
            let overrides = UpgradeOverrides {
                outer_struct_id,
                inner_struct_id,
                alt_color,
                no_prefix_newline,
            };
            run_upgrades(&settings, &input, &out.output, overrides)
        }
        Commands::SetText { sets, out } => run_set_text(&settings, &sets, &out.output),
        Commands::ItemText { items, sets, out } => {
            run_item_text(&settings, &items, &sets, &out.output)
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => run_config_show(&settings, &source),
            ConfigAction::Path => {
                run_config_path();
                Ok(())
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_budget_flags_conflict() {
        let result = Cli::try_parse_from([
            "sheet-forge",
            "artifacts",
            "items.csv",
            "sets.csv",
            "-o",
            "out.json",
            "--budget",
            "80",
            "--no-budget",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "sheet-forge",
            "monsters",
            "m.csv",
            "--output",
            "m.json",
            "--quiet",
            "--config",
            "s.toml",
        ])
        .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("s.toml")));
    }
}
