use std::fs::File;
use std::path::PathBuf;

use aoc_rope::parser::{read_and_parse, read_from_stdin_and_parse};
use aoc_rope::{simulate, Direction, Move};
use clap::Parser;
use log::info;

/// Counts the positions visited by the tail of a rope dragged around by
/// a list of head moves.
#[derive(Parser, Debug)]
struct Args {
    /// File with one `<U|D|L|R> <count>` move per line. Reads stdin if absent.
    input: Option<PathBuf>,

    /// Number of knots in the rope, head included. May be repeated.
    #[arg(short, long = "knots", default_values_t = [2, 10])]
    knots: Vec<usize>,
}

pub fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let moves = match &args.input {
        Some(path) => read_and_parse(File::open(path)?, parser::parse_input)?,
        None => read_from_stdin_and_parse(parser::parse_input)?,
    };
    info!("parsed {} moves", moves.len());

    for &knots in &args.knots {
        let count = simulate(moves.iter().copied(), knots)?;
        println!("{} knots: {}", knots, count);
    }

    Ok(())
}

mod parser {
    use super::*;

    use aoc_rope::parser::base10_numeric;

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::character::complete::{line_ending, space1};
    use nom::combinator::eof;
    use nom::multi::{many0, separated_list0};
    use nom::sequence::{separated_pair, terminated, tuple};
    use nom::{IResult, Parser};

    fn direction(input: &str) -> IResult<&str, Direction> {
        alt((
            tag("U").map(|_| Direction::Up),
            tag("D").map(|_| Direction::Down),
            tag("L").map(|_| Direction::Left),
            tag("R").map(|_| Direction::Right),
        ))
        .parse(input)
    }

    fn a_move(input: &str) -> IResult<&str, Move> {
        separated_pair(direction, space1, base10_numeric)
            .map(|(direction, count)| Move { direction, count })
            .parse(input)
    }

    pub(super) fn parse_input(input: &str) -> IResult<&str, Vec<Move>> {
        terminated(
            separated_list0(line_ending, a_move),
            tuple((many0(line_ending), eof)),
        )
        .parse(input)
    }

}
