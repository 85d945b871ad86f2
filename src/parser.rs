use std::io::Read;
use std::str::FromStr;

use nom::character::complete::digit1;
use nom::combinator::map_res;
use nom::{Finish, IResult, Parser};

use crate::error::Result;

/// Unsigned decimal number; a leading sign is rejected.
pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s: &str| s.parse::<N>()).parse(input)
}

/// Runs `parser` over `input` and detaches any error from the
/// borrowed input, so it can outlive the buffer it was read from.
pub fn nom_parse_to_owned<O, P>(mut parser: P, input: &str) -> Result<O>
where
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    let (_rest, output) = parser
        .parse(input)
        .finish()
        .map_err(|nom::error::Error { input, code }| {
            nom::error::Error::new(input.to_owned(), code)
        })?;

    Ok(output)
}

pub fn read_and_parse<R, O, P>(mut reader: R, parser: P) -> Result<O>
where
    R: Read,
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    nom_parse_to_owned(parser, &buffer)
}

pub fn read_from_stdin_and_parse<O, P>(parser: P) -> Result<O>
where
    P: for<'i> Parser<&'i str, O, nom::error::Error<&'i str>>,
{
    read_and_parse(std::io::stdin().lock(), parser)
}
