//! Command-line interface.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use orefinder_common::{ChunkCoord, MineralKind, VersionTag};
use orefinder_worldgen::{DepositFinder, DepositQuery};
use tracing::info;

use crate::config::CliConfig;
use crate::report::SearchReport;

/// Seed of the reference query run by `selftest`.
pub const SELFTEST_SEED: i64 = 123_456_789;

/// Find ore deposits near a position in a seeded world.
#[derive(Debug, Parser)]
#[command(name = "orefinder")]
pub struct Cli {
    /// Configuration file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search for deposits around a block column
    #[command(allow_negative_numbers = true)]
    Find {
        /// World seed
        seed: i64,
        /// Block X
        x: i32,
        /// Block Z
        z: i32,
        /// Game version, e.g. 1.20 or 1.20.4
        #[arg(long = "version")]
        game_version: Option<String>,
        /// Search radius in chunks
        #[arg(long)]
        radius: Option<i32>,
        /// Only report this mineral
        #[arg(long)]
        ore: Option<String>,
        /// Only report these minerals (comma separated)
        #[arg(long, value_delimiter = ',')]
        ores: Vec<String>,
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// List supported versions
    Versions,
    /// List supported minerals
    Ores,
    /// Run the reference query and check its chunk
    Selftest,
    /// Print the effective configuration
    Config {
        /// Also write it to the configuration file
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// Configuration from `--config`, or the default location.
    pub fn load_config(&self) -> CliConfig {
        match &self.config {
            Some(path) => CliConfig::load_from(path),
            None => CliConfig::load(),
        }
    }

    /// Runs the command, writing results to `out`.
    pub fn run(self, config: &CliConfig, out: &mut impl Write) -> Result<()> {
        match self.command {
            Command::Find {
                seed,
                x,
                z,
                game_version,
                radius,
                ore,
                ores,
                pretty,
            } => {
                let version = match game_version {
                    Some(raw) => raw.parse().with_context(|| format!("invalid --version {raw:?}"))?,
                    None => config.default_version,
                };
                let mut query = DepositQuery::new(seed, x, z).version(version).ores(ores);
                query.radius = radius;
                query.ore = ore;

                let finder = finder(config)?;
                let result = finder.query(&query).context("deposit search failed")?;
                let report = SearchReport::from(&result);
                writeln!(out, "{}", report.to_json(pretty || config.pretty)?)?;
            },
            Command::Versions => {
                for version in finder(config)?.supported_versions() {
                    writeln!(out, "{version}")?;
                }
            },
            Command::Ores => {
                for kind in MineralKind::ALL {
                    writeln!(out, "{kind}")?;
                }
            },
            Command::Selftest => {
                let result = finder(config)?
                    .find_deposits(SELFTEST_SEED, 100, 200, VersionTag::V1_20, 0, None)
                    .context("reference query failed")?;
                ensure!(
                    result.chunk_coords == ChunkCoord::new(6, 12),
                    "reference query landed in chunk {}, expected (6, 12)",
                    result.chunk_coords
                );
                ensure!(
                    result
                        .deposits
                        .iter()
                        .all(|d| result.chunk_coords.contains(d.column())),
                    "reference query reported a deposit outside its chunk"
                );
                writeln!(
                    out,
                    "ok: seed {SELFTEST_SEED} at (100, 200) in chunk {}: {} deposits, {} ore blocks",
                    result.chunk_coords,
                    result.deposits.len(),
                    result.total_count
                )?;
            },
            Command::Config { write } => {
                write!(out, "{}", config.to_toml()?)?;
                if write {
                    let path = self.config.unwrap_or_else(CliConfig::config_path);
                    config
                        .save_to(&path)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
            },
        }
        Ok(())
    }
}

fn finder(config: &CliConfig) -> Result<DepositFinder> {
    let finder = DepositFinder::new(config.finder.clone()).context("failed to build rule tables")?;
    info!("Searching with max distance {}", finder.config().max_distance);
    Ok(finder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("orefinder").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        cli.run(&CliConfig::default(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_find_prints_report() {
        let out = run(&["find", "123456789", "100", "200", "--version", "1.20", "--radius", "0"])
            .expect("find");
        let json: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(json["chunk_coordinates"]["x"], 6);
        assert_eq!(json["chunk_coordinates"]["z"], 12);
        assert_eq!(json["total_ores"], 293);
        assert_eq!(json["message"], "Found 293 ore blocks in Java 1.20");
        assert_eq!(json["ore_locations"][0]["type"], "Copper");
        assert!(!out.contains("\n  "));
    }

    #[test]
    fn test_find_accepts_negative_coordinates_and_patch_versions() {
        let out = run(&["find", "-42", "-1000", "-5000", "--version", "1.18.2", "--radius", "0"])
            .expect("find");
        let json: serde_json::Value = serde_json::from_str(&out).expect("json");
        assert_eq!(json["version"], "1.18");
        assert_eq!(json["chunk_coordinates"]["x"], -63);
        assert_eq!(json["search_coordinates"]["z"], -5000);
    }

    #[test]
    fn test_find_merges_type_filters() {
        let out = run(&[
            "find", "123456789", "100", "200", "--version", "1.20", "--ore", "diamond", "--ores",
            "Gold,lapis", "--pretty",
        ])
        .expect("find");
        let json: serde_json::Value = serde_json::from_str(&out).expect("json");
        let locations = json["ore_locations"].as_array().expect("array");
        assert!(!locations.is_empty());
        assert!(locations.iter().all(|l| {
            matches!(l["type"].as_str(), Some("Diamond" | "Gold" | "Lapis Lazuli"))
        }));
        assert!(out.contains("\n  \"seed\""));
    }

    #[test]
    fn test_find_rejects_bad_input() {
        let err = run(&["find", "1", "0", "0", "--version", "1.7"]).expect_err("bad version");
        assert!(format!("{err:#}").contains("Unsupported version"));

        let err = run(&["find", "1", "0", "0", "--ore", "mithril"]).expect_err("bad ore");
        assert!(format!("{err:#}").contains("mithril"));

        let err = run(&["find", "1", "0", "0", "--radius", "-2"]).expect_err("bad radius");
        assert!(format!("{err:#}").contains("-2"));
    }

    #[test]
    fn test_listing_commands() {
        assert_eq!(run(&["versions"]).expect("versions"), "1.18\n1.19\n1.20\n1.21\n");
        let ores = run(&["ores"]).expect("ores");
        assert_eq!(ores.lines().count(), 8);
        assert!(ores.lines().any(|l| l == "Lapis Lazuli"));
    }

    #[test]
    fn test_selftest() {
        let out = run(&["selftest"]).expect("selftest");
        assert!(out.starts_with("ok: seed 123456789 at (100, 200) in chunk (6, 12)"));
        assert!(out.contains("214 deposits, 293 ore blocks"));
    }

    #[test]
    fn test_config_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("orefinder.toml");
        let path_arg = path.to_str().expect("utf-8 path");

        let out = run(&["config", "--write", "--config", path_arg]).expect("config");
        assert!(out.contains("[finder]"));
        assert_eq!(CliConfig::load_from(&path), CliConfig::default());
    }
}
