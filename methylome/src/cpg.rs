use crate::{base::Base, row::PositionCounts, table::CountTable};

/// True when `current` is the C of a CpG dinucleotide, i.e. `next` is a G.
pub fn is_cpg_pair(current: &PositionCounts, next: &PositionCounts) -> bool {
    current.reference == Base::C && next.reference == Base::G
}

/// Selects the rows sitting on the C of a CpG site.
///
/// A row qualifies when its REF is `C` and the row right after it in the table
/// has REF `G`. Only the C rows are returned, in table order. The last row has
/// no successor and never qualifies.
///
/// Adjacency is by table order, not by position value: after rows were dropped
/// by the loader, two neighbouring rows may be further apart on the reference.
///
/// # Examples
/// ```
/// use methylome::{extract_cpg, load};
///
/// let table = load("POS REF A C G T\n10 C 1 5 0 2\n11 G 0 1 6 0\n12 A 3 0 0 1\n").unwrap();
/// let cpg = extract_cpg(&table);
/// assert_eq!(cpg.len(), 1);
/// assert_eq!(cpg.rows()[0].position, 10);
/// ```
pub fn extract_cpg(table: &CountTable) -> CountTable {
    table
        .rows()
        .windows(2)
        .filter(|pair| is_cpg_pair(&pair[0], &pair[1]))
        .map(|pair| pair[0])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_from_refs(refs: &str) -> CountTable {
        refs.chars()
            .enumerate()
            .map(|(i, c)| PositionCounts::new(i as u64 + 1, Base::parse_char(c), 1, 1, 1, 1))
            .collect()
    }

    fn positions(table: &CountTable) -> Vec<u64> {
        table.iter().map(|r| r.position).collect()
    }

    #[test]
    fn test_single_cpg() {
        let cpg = extract_cpg(&table_from_refs("CGA"));
        assert_eq!(positions(&cpg), vec![1]);
    }

    #[test]
    fn test_multiple_sites_keep_order() {
        let cpg = extract_cpg(&table_from_refs("ACGTTCGCCG"));
        assert_eq!(positions(&cpg), vec![2, 6, 9]);
        assert!(cpg.iter().all(|r| r.reference == Base::C));
    }

    #[test]
    fn test_lookahead_is_exactly_one_row() {
        // C..G with a base in between is not a CpG site.
        let cpg = extract_cpg(&table_from_refs("CAG"));
        assert!(cpg.is_empty());
    }

    #[test]
    fn test_trailing_c_never_qualifies() {
        let cpg = extract_cpg(&table_from_refs("GC"));
        assert!(cpg.is_empty());
    }

    #[test]
    fn test_gpc_is_not_cpg() {
        assert_eq!(positions(&extract_cpg(&table_from_refs("GCGC"))), vec![2]);
    }

    #[test]
    fn test_lowercase_reference_is_not_cpg() {
        assert!(extract_cpg(&table_from_refs("cgCg")).is_empty());
    }

    #[test]
    fn test_empty_and_single_row_tables() {
        assert!(extract_cpg(&CountTable::default()).is_empty());
        assert!(extract_cpg(&table_from_refs("C")).is_empty());
    }

    #[test]
    fn test_adjacency_is_by_table_order_not_position() {
        let table = CountTable::new(vec![
            PositionCounts::new(100, Base::C, 0, 4, 0, 1),
            PositionCounts::new(250, Base::G, 0, 0, 3, 0),
        ]);
        assert_eq!(positions(&extract_cpg(&table)), vec![100]);
    }

    #[test]
    fn test_c_before_dropped_line_pairs_with_next_kept_g() {
        let raw = "\
POS REF A C G T
1 A 5 0 0 0
2 C 0 6 0 1
3 T 0 0 0 not_a_count
4 G 0 0 7 0
5 C 0 4 0 2
6 A 3 0 0
7 G 0 0 5 0
";
        let (table, report) = crate::TableLoader::default().load_str(raw).unwrap();
        assert_eq!(report.rows_dropped(), 2);

        let cpg = extract_cpg(&table);
        assert_eq!(positions(&cpg), vec![2, 5]);
    }

    #[test]
    fn test_result_is_subsequence_with_g_successor() {
        let table = table_from_refs("TTCGACGGCCGCGAC");
        let cpg = extract_cpg(&table);
        let rows = table.rows();

        for selected in &cpg {
            let idx = rows.iter().position(|r| r == selected).unwrap();
            assert_eq!(rows[idx].reference, Base::C);
            assert!(idx + 1 < rows.len());
            assert_eq!(rows[idx + 1].reference, Base::G);
        }
        assert_eq!(positions(&cpg), vec![3, 6, 10, 12]);
    }
}
