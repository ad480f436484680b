use super::ast::ParsedStatement;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{alpha1, alphanumeric1, char, digit1, space0, space1},
    combinator::{map, map_opt, map_res, opt, recognize, value},
    multi::{many0, separated_list0, separated_list1},
    number::complete::double,
    sequence::{delimited, pair, preceded, terminated, tuple},
    IResult,
};

// --- Helpers ---

fn identifier(input: &str) -> IResult<&str, String> {
    map(
        recognize(pair(
            alt((alpha1, tag("_"))),
            many0(alt((alphanumeric1, tag("_")))),
        )),
        |s: &str| s.to_string(),
    )(input)
}

fn usize_parser(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

// Signed reals with optional fraction and exponent: `-0.5`, `.5`, `1e-05`.
fn float_parser(input: &str) -> IResult<&str, f64> {
    double(input)
}

pub fn comment(input: &str) -> IResult<&str, ()> {
    value((), pair(char('#'), take_while(|c| c != '\n')))(input)
}

// --- Quil Parsers ---

pub fn pragma(input: &str) -> IResult<&str, ParsedStatement> {
    map_opt(
        preceded(
            pair(tag("PRAGMA"), space1),
            terminated(take_while1(|c| c != '#'), opt(comment)),
        ),
        |text: &str| {
            let text = text.trim_end();
            (!text.is_empty()).then(|| ParsedStatement::Pragma(text.to_string()))
        },
    )(input)
}

pub fn gate_call(input: &str) -> IResult<&str, ParsedStatement> {
    let (input, name) = identifier(input)?;
    let (input, params) = opt(delimited(
        char('('),
        separated_list0(tuple((space0, char(','), space0)), float_parser),
        char(')'),
    ))(input)?;
    let (input, _) = space1(input)?;
    let (input, qubits) = separated_list1(space1, usize_parser)(input)?;
    let (input, _) = space0(input)?;

    Ok((
        input,
        ParsedStatement::Gate(name, params.unwrap_or_default(), qubits),
    ))
}
