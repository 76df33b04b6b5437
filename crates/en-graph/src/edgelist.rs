//! Edge-list CSV loader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, NodeId};

/// Load an undirected graph from a two-column comma-separated file.
///
/// Blank lines and lines starting with `#` are ignored. Rows with fewer
/// than two fields are silently skipped; extra columns are ignored. A row
/// whose first two fields do not parse as node ids is an error.
pub fn load_edge_list(path: &Path) -> GraphResult<Graph> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut g = Graph::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split(',');
        let (Some(u), Some(v)) = (fields.next(), fields.next()) else {
            continue;
        };
        let u = parse_node(u, idx + 1)?;
        let v = parse_node(v, idx + 1)?;
        g.add_edge(u, v);
    }

    debug!(
        path = %path.display(),
        nodes = g.node_count(),
        edges = g.edge_count(),
        "loaded edge list"
    );
    Ok(g)
}

fn parse_node(field: &str, line: usize) -> GraphResult<NodeId> {
    field
        .trim()
        .parse()
        .map_err(|_| GraphError::BadNodeId {
            line,
            value: field.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_edges_and_skips_junk_rows() {
        let file = write_file("1,2\n2,3\n#comment\nbad\n\n");
        let g = load_edge_list(file.path()).unwrap();
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.has_edge(1, 2));
        assert!(g.has_edge(2, 3));
        assert!(!g.has_edge(1, 3));
    }

    #[test]
    fn extra_columns_ignored() {
        let file = write_file("1,2,weight=3\n");
        let g = load_edge_list(file.path()).unwrap();
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn unparsable_id_is_an_error() {
        let file = write_file("1,2\nfoo,3\n");
        let err = load_edge_list(file.path()).unwrap_err();
        match err {
            GraphError::BadNodeId { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "foo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_edge_list(Path::new("/nonexistent/edges.csv")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
