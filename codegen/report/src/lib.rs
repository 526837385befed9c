//! Formats the three directive outputs that aren't plain DOT text
//! (`spec.md` §6.2): `A` (the adjacency matrix as a 2-D array literal),
//! `DIMENSION` (a decimal number), and `SIMPLIFY` (rewritten maps, dimension,
//! and DFA DOT, stitched together from `padic_codegen_dot`'s renderer).

use std::fmt::Display;

/// `A`'s output: `[[a00, a01, ...], [a10, a11, ...], ...]`.
pub fn format_adjacency_matrix(matrix: &[Vec<u64>]) -> String {
    let rows: Vec<String> = matrix
        .iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(u64::to_string).collect();
            format!("[{}]", cells.join(", "))
        })
        .collect();
    format!("[{}]", rows.join(", "))
}

/// `DIMENSION`'s output: a plain decimal.
pub fn format_dimension(dimension: f64) -> String {
    format!("{dimension}")
}

/// `SIMPLIFY`'s output: the rewritten map list, one per line, followed by
/// the dimension and the simplified DFA's DOT source.
pub fn format_simplify_report<M: Display>(maps: &[M], dimension: f64, dfa_dot: &str) -> String {
    let mut out = String::new();
    for map in maps {
        out.push_str(&map.to_string());
        out.push('\n');
    }
    out.push_str(&format!("Hausdorff Dimension: {dimension}\n"));
    out.push_str("DFA:\n");
    out.push_str(dfa_dot);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use padic_core::PAdic;
    use padic_ifs::RealMap;

    #[test]
    fn formats_a_square_adjacency_matrix_as_nested_arrays() {
        let matrix = vec![vec![2, 0], vec![1, 1]];
        assert_eq!(format_adjacency_matrix(&matrix), "[[2, 0], [1, 1]]");
    }

    #[test]
    fn formats_dimension_as_a_plain_decimal() {
        assert_eq!(format_dimension(1.0), "1");
        assert!(format_dimension(0.5).starts_with("0.5"));
    }

    #[test]
    fn simplify_report_lists_maps_then_dimension_then_dot() {
        let maps = vec![RealMap::new("A", PAdic::zero(2), 1, 1).unwrap()];
        let report = format_simplify_report(&maps, 1.0, "digraph G {}\n");
        assert!(report.contains("A:"));
        assert!(report.contains("Hausdorff Dimension: 1"));
        assert!(report.ends_with("digraph G {}\n"));
    }
}
