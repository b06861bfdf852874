use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use sleigh_core::*;

#[derive(Parser, Debug)]
#[command(version, about = "Developer tasks for the built-in levels", long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse every built-in level and print a summary of each
    Check,
    /// Print one level
    Show {
        /// Level number, starting at 1
        number: LevelNumber,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Play a sequence of moves against a fresh attempt
    Replay {
        /// Level number, starting at 1
        number: LevelNumber,
        /// Moves written as `row,column`
        #[arg(value_parser = parse_coords)]
        moves: Vec<Coord2>,
        /// Print the final state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("{:?}", args.command);

    let catalog = Catalog::builtin().context("built-in levels are invalid")?;
    match args.command {
        Command::Check => check(&catalog),
        Command::Show { number, json } => show(&catalog, number, json),
        Command::Replay {
            number,
            moves,
            json,
        } => replay(&catalog, number, &moves, json),
    }
}

fn check(catalog: &Catalog) -> Result<()> {
    for (number, level) in catalog.iter() {
        println!("{}", summary(number, level));
    }
    log::info!("{} levels ok", catalog.len());
    Ok(())
}

fn show(catalog: &Catalog, number: LevelNumber, json: bool) -> Result<()> {
    let level = find_level(catalog, number)?;
    if json {
        let value = serde_json::json!({
            "number": number,
            "rows": level.rows(),
            "columns": level.columns(),
            "presents": level.present_count(),
            "grinches": level.grinch_count(),
            "text": level,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", summary(number, level));
        println!("{level}");
    }
    Ok(())
}

fn replay(catalog: &Catalog, number: LevelNumber, moves: &[Coord2], json: bool) -> Result<()> {
    let level = find_level(catalog, number)?;
    let mut attempt = LevelAttempt::new(level);

    for &coords in moves {
        match attempt.move_to(coords) {
            Ok(outcome) => {
                if !json {
                    println!("({}, {}): {:?}", coords.0, coords.1, outcome);
                }
            }
            Err(err) => {
                print_attempt(&attempt, json)?;
                bail!("move {} rejected: {}", attempt.moves() + 1, err);
            }
        }
    }

    print_attempt(&attempt, json)
}

fn find_level(catalog: &Catalog, number: LevelNumber) -> Result<&Level> {
    catalog
        .level(number)
        .with_context(|| format!("no level {number}, there are {}", catalog.len()))
}

fn summary(number: LevelNumber, level: &Level) -> String {
    format!(
        "level {}: {}x{}, {} presents, {} grinches",
        number,
        level.rows(),
        level.columns(),
        level.present_count(),
        level.grinch_count()
    )
}

fn print_attempt(attempt: &LevelAttempt, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&attempt.snapshot())?);
        return Ok(());
    }

    println!("{}", render(attempt));
    let status = if attempt.is_failed() {
        "failed"
    } else if attempt.is_complete() {
        "complete"
    } else {
        "in progress"
    };
    println!(
        "{} moves, {}/{} presents, {}",
        attempt.moves(),
        attempt.found_presents(),
        attempt.total_presents(),
        status
    );
    Ok(())
}

/// Draws the grid with Santa as `S` and visited ground as `+`.
fn render(attempt: &LevelAttempt) -> String {
    attempt
        .cells()
        .rows()
        .into_iter()
        .map(|row| {
            row.iter()
                .map(|cell| match (cell.state, cell.cell) {
                    (AttemptState::Santa, _) => 'S',
                    (state, LevelCell::Empty) if state.is_touched() => '+',
                    (_, terrain) => terrain.symbol(),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_coords(text: &str) -> Result<Coord2, String> {
    let (row, column) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `row,column`, got `{text}`"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<Coord>()
            .map_err(|err| format!("bad coordinate `{part}`: {err}"))
    };
    Ok((parse(row)?, parse(column)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_row_column_pairs() {
        assert_eq!(parse_coords("0,1"), Ok((0, 1)));
        assert_eq!(parse_coords(" 2 , 3 "), Ok((2, 3)));
    }

    #[test]
    fn rejects_malformed_moves() {
        assert!(parse_coords("01").is_err());
        assert!(parse_coords("a,1").is_err());
        assert!(parse_coords("-1,0").is_err());
        assert!(parse_coords("0,256").is_err());
    }

    #[test]
    fn render_marks_santa_and_trail() {
        let level = Level::parse("S-P\nG--").unwrap();
        let mut attempt = LevelAttempt::new(&level);
        attempt.move_to((0, 1)).unwrap();
        attempt.move_to((1, 1)).unwrap();

        assert_eq!(render(&attempt), "++P\nGS-");
    }

    #[test]
    fn args_parse_replay_moves() {
        let args = Args::try_parse_from(["xtask", "replay", "2", "0,1", "0,2"]).unwrap();

        match args.command {
            Command::Replay { number, moves, json } => {
                assert_eq!(number, 2);
                assert_eq!(moves, [(0, 1), (0, 2)]);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
