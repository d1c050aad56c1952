use chumsky::error::Simple;
use chumsky::primitive::{choice, end, just, none_of};
use chumsky::text::TextParser;
use chumsky::{text, Parser};
use solver::{Parity, Player};

use crate::{ArenaFile, Node, Successor};

pub fn parse_arena(source: &str) -> Result<ArenaFile, Vec<Simple<char>>> {
    let number = text::int(10)
        .try_map(|n: String, span| {
            n.parse::<usize>().map_err(|e| Simple::custom(span, format!("{n}: {e}")))
        })
        .padded();
    let comma = just(',').padded();
    let semi = just(';');
    let newline = text::newline();

    let parity = choice((just("max").to(Parity::Max), just("min").to(Parity::Min))).padded();
    let acceptance = choice((just("even").to(Player::Even), just("odd").to(Player::Odd))).padded();

    let header = just("arena")
        .padded()
        .ignore_then(number.clone())
        .then_ignore(just("start").padded())
        .then(number.clone())
        .then_ignore(just("parity").padded())
        .then(parity)
        .then(acceptance)
        .then_ignore(semi)
        .then_ignore(newline);

    let player = choice((just('0').to(Player::Even), just('1').to(Player::Odd))).padded();
    let level = just('@').ignore_then(number.clone()).or_not();
    let successor = number.clone().then(level).map(|(id, level)| Successor { id, level });
    let successors = successor.separated_by(comma);
    let comment = none_of("\"").repeated().delimited_by(just('"'), just('"')).padded().or_not();
    let row = number.then(player).then(successors).then_ignore(comment);
    let row = row.map(|((id, owner), successors)| Node { id, owner, successors });

    let rows = row.then_ignore(semi).separated_by(newline).allow_trailing();
    let file = header.then(rows).map(|((((vertex_count, start), parity), acceptance), nodes)| {
        ArenaFile { vertex_count, start, parity, acceptance, nodes }
    });

    file.then_ignore(text::whitespace()).then_ignore(end()).parse(source)
}
