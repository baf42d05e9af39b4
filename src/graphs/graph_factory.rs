use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use log::{info, warn};
use thiserror::Error;

use super::{adjacency_graph::AdjacencyGraph, Graph, Line, Node, Weight};

#[derive(Error, Debug)]
pub enum GraphReadError {
    #[error("unable to read graph file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Problems with a single arc record. Such records are skipped.
#[derive(Error, Debug, PartialEq)]
pub enum RecordError {
    #[error("line {line_number}: expected at least 3 columns (tail, head, weight), found {found}")]
    MissingColumns { line_number: usize, found: usize },
    #[error("line {line_number}: unable to parse weight '{value}'")]
    InvalidWeight { line_number: usize, value: String },
    #[error("line {line_number}: weight {weight} is negative or not finite")]
    UnsupportedWeight { line_number: usize, weight: Weight },
    #[error("line {line_number}: not valid UTF-8")]
    InvalidEncoding { line_number: usize },
}

/// One parsed arc row of a network file.
#[derive(Debug, PartialEq)]
pub struct ArcRecord {
    pub tail: Node,
    pub head: Node,
    pub weight: Weight,
    pub line: Option<Line>,
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a network file with one arc per row:
    /// `tail<TAB>head<TAB>weight[<TAB>line]`. Rows without a tab are split
    /// on whitespace instead. Malformed rows are reported and skipped.
    pub fn from_file(path: &Path) -> Result<AdjacencyGraph, GraphReadError> {
        let file = File::open(path).map_err(|source| GraphReadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let graph =
            GraphFactory::from_reader(BufReader::new(file)).map_err(|source| GraphReadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            "loaded {} nodes and {} arcs from {}",
            graph.number_of_nodes(),
            graph.number_of_arcs(),
            path.display()
        );
        Ok(graph)
    }

    /// Rows are decoded one by one, so a row that is not valid UTF-8 is
    /// skipped like any other malformed row.
    pub fn from_reader<R: BufRead>(mut reader: R) -> io::Result<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::new();
        let mut buffer = Vec::new();
        let mut line_number = 0;

        while reader.read_until(b'\n', &mut buffer)? > 0 {
            line_number += 1;
            let record = match std::str::from_utf8(&buffer) {
                Ok(line) => GraphFactory::parse_record(line, line_number),
                Err(_) => Err(RecordError::InvalidEncoding { line_number }),
            };
            match record {
                Ok(Some(record)) => GraphFactory::add_record(&mut graph, &record),
                Ok(None) => (),
                Err(error) => warn!("skipping record: {}", error),
            }
            buffer.clear();
        }

        Ok(graph)
    }

    pub fn from_text(content: &str) -> io::Result<AdjacencyGraph> {
        GraphFactory::from_reader(content.as_bytes())
    }

    /// Parses a single row. Blank rows and `#` comments yield `None`.
    pub fn parse_record(line: &str, line_number: usize) -> Result<Option<ArcRecord>, RecordError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let columns: Vec<&str> = if line.contains('\t') {
            line.split('\t').map(str::trim).collect()
        } else {
            line.split_whitespace().collect()
        };

        if columns.len() < 3 {
            return Err(RecordError::MissingColumns {
                line_number,
                found: columns.len(),
            });
        }

        let weight: Weight = columns[2]
            .parse()
            .map_err(|_| RecordError::InvalidWeight {
                line_number,
                value: columns[2].to_string(),
            })?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(RecordError::UnsupportedWeight {
                line_number,
                weight,
            });
        }

        let transit_line = columns
            .get(3)
            .filter(|column| !column.is_empty())
            .map(|column| column.to_string());

        Ok(Some(ArcRecord {
            tail: columns[0].to_string(),
            head: columns[1].to_string(),
            weight,
            line: transit_line,
        }))
    }

    fn add_record(graph: &mut AdjacencyGraph, record: &ArcRecord) {
        match &record.line {
            Some(line) => graph.add_arc_with_line(&record.tail, &record.head, record.weight, line),
            None => graph.add_arc(&record.tail, &record.head, record.weight),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ArcRecord, GraphFactory, RecordError};
    use crate::graphs::Graph;

    #[test]
    fn parses_tab_separated_record_with_line() {
        let record = GraphFactory::parse_record("Châtelet\tLes Halles\t1.5\tA", 1)
            .unwrap()
            .unwrap();
        assert_eq!(
            record,
            ArcRecord {
                tail: "Châtelet".to_string(),
                head: "Les Halles".to_string(),
                weight: 1.5,
                line: Some("A".to_string()),
            }
        );
    }

    #[test]
    fn parses_whitespace_separated_record() {
        let record = GraphFactory::parse_record("A B 12", 1).unwrap().unwrap();
        assert_eq!(record.tail, "A");
        assert_eq!(record.head, "B");
        assert_eq!(record.weight, 12.0);
        assert_eq!(record.line, None);
    }

    #[test]
    fn skips_blank_and_comment_rows() {
        assert_eq!(GraphFactory::parse_record("   ", 1), Ok(None));
        assert_eq!(GraphFactory::parse_record("# stations", 2), Ok(None));
    }

    #[test]
    fn reports_malformed_rows() {
        assert_eq!(
            GraphFactory::parse_record("A\tB", 4),
            Err(RecordError::MissingColumns {
                line_number: 4,
                found: 2
            })
        );
        assert_eq!(
            GraphFactory::parse_record("A\tB\tfar", 5),
            Err(RecordError::InvalidWeight {
                line_number: 5,
                value: "far".to_string()
            })
        );
        assert!(matches!(
            GraphFactory::parse_record("A\tB\t-3", 6),
            Err(RecordError::UnsupportedWeight { line_number: 6, .. })
        ));
    }

    #[test]
    fn bad_rows_do_not_abort_loading() {
        let graph =
            GraphFactory::from_text("A\tB\t12\nbroken\nB\tC\tx\nB\tC\t3\tM1\n").unwrap();

        assert_eq!(graph.nodes(), vec!["A", "B", "C"]);
        assert_eq!(graph.number_of_arcs(), 2);
        assert_eq!(graph.outgoing("B")[0].line(), Some("M1"));
    }

    #[test]
    fn row_with_invalid_utf8_is_skipped() {
        let content: &[u8] = b"A\tB\t12\nCh\xe2telet\tC\t3\nB\tC\t4\r\n";
        let graph = GraphFactory::from_reader(content).unwrap();

        assert_eq!(graph.nodes(), vec!["A", "B", "C"]);
        assert_eq!(graph.number_of_arcs(), 2);
        assert_eq!(graph.outgoing("B")[0].weight(), 4.0);
    }
}
