use std::fs;

use log::warn;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1, space0, space1};
use nom::combinator::{map, map_res, rest};
use nom::sequence::{preceded, tuple};

use crate::error::GraphError;

/// a line of a DIMACS file
#[derive(Debug, PartialEq, Eq)]
enum DimacsLine {
    /// comment line (starts with 'c')
    Comment,
    /// header: number of vertices, number of edges
    Header(usize, usize),
    /// edge (WARNING: indices start at 1 in the DIMACS format)
    Edge(usize, usize),
}

/// reads an unsigned integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |d:&str| d.parse::<usize>())(s)
}

/// reads two numbers separated by spaces
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    map(
        tuple((read_integer, space1, read_integer, space0)),
        |(a,_,b,_)| (a,b)
    )(s)
}

/// skips a single comment
fn read_comment(s:&str) -> IResult<&str, DimacsLine> {
    map(preceded(char('c'), rest), |_| DimacsLine::Comment)(s)
}

/// reads header containing (n,m)
fn read_header(s:&str) -> IResult<&str, DimacsLine> {
    map(
        preceded(tuple((alt((tag("p edge"), tag("p col"))), space1)), read_two_integers),
        |(n,m)| DimacsLine::Header(n,m)
    )(s)
}

/// reads edge line
fn read_edge(s:&str) -> IResult<&str, DimacsLine> {
    map(
        preceded(tuple((char('e'), space1)), read_two_integers),
        |(a,b)| DimacsLine::Edge(a,b)
    )(s)
}

/// reads any line of a DIMACS file
fn read_line(s:&str) -> IResult<&str, DimacsLine> {
    alt((read_comment, read_header, read_edge))(s)
}

/** parses a DIMACS instance, returns (n,m,adj_list).
Vertices are renumbered from 0. Self-loops and out of range vertices are rejected.
Duplicated edges are kept in the adjacency lists (they are merged when building an instance).
*/
pub fn parse_dimacs(s:&str) -> Result<(usize, usize, Vec<Vec<usize>>), GraphError> {
    let mut header:Option<(usize,usize)> = None;
    let mut adj_list:Vec<Vec<usize>> = Vec::new();
    let mut check_nb_edges = 0;
    for (i,raw_line) in s.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() { continue; }
        let parse_error = |reason:String| GraphError::Parse { line:i+1, reason };
        let parsed = match read_line(line) {
            Ok(("", l)) => l,
            _ => return Err(parse_error(format!("unable to parse \"{}\"", line))),
        };
        match (parsed, header) {
            (DimacsLine::Comment, _) => {},
            (DimacsLine::Header(n,m), None) => {
                header = Some((n,m));
                adj_list = vec![Vec::new() ; n];
            },
            (DimacsLine::Header(_,_), Some(_)) => {
                return Err(parse_error("duplicated header".to_string()));
            },
            (DimacsLine::Edge(_,_), None) => {
                return Err(parse_error("edge defined before the header".to_string()));
            },
            (DimacsLine::Edge(a,b), Some((n,_))) => {
                if a == 0 || b == 0 || a > n || b > n {
                    return Err(parse_error(format!("edge ({},{}) out of range 1..{}", a, b, n)));
                }
                if a == b {
                    return Err(GraphError::SelfLoop { vertex: a.to_string() });
                }
                adj_list[a-1].push(b-1);
                adj_list[b-1].push(a-1);
                check_nb_edges += 1;
            },
        }
    }
    match header {
        None => Err(GraphError::Parse { line:0, reason:"missing header".to_string() }),
        Some((n,m)) => {
            if check_nb_edges != m && 2*check_nb_edges != m {
                warn!("DIMACS header announces {} edges, {} were read", m, check_nb_edges);
            }
            Ok((n, m, adj_list))
        }
    }
}

/// reads an instance from file, returns (n,m,adj_list)
pub fn read_from_file(filename:&str) -> Result<(usize, usize, Vec<Vec<usize>>), GraphError> {
    let s = fs::read_to_string(filename)?;
    parse_dimacs(&s)
}
