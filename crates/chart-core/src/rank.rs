// File: crates/chart-core/src/rank.rs
// Summary: Ordering transform: stable sort by mean highpoint and 1-based rank keys.

use crate::record::TrailRecord;

/// Sort ascending by `mean_highpoint_m` (ties keep input order) and assign
/// `key = index + 1` in the sorted order.
pub fn rank_by_highpoint(mut records: Vec<TrailRecord>) -> Vec<TrailRecord> {
    // sort_by is stable; loader guarantees finite values so total_cmp orders as `<`.
    records.sort_by(|a, b| a.mean_highpoint_m.total_cmp(&b.mean_highpoint_m));
    for (i, r) in records.iter_mut().enumerate() {
        r.key = (i + 1) as u32;
    }
    records
}

/// Smallest and largest key, or `None` for an empty slice.
pub fn key_extent(records: &[TrailRecord]) -> Option<(u32, u32)> {
    let min = records.iter().map(|r| r.key).min()?;
    let max = records.iter().map(|r| r.key).max()?;
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(region: &str, high: f64) -> TrailRecord {
        TrailRecord::new(region, high, 4.0, "")
    }

    #[test]
    fn sorts_and_numbers() {
        let out = rank_by_highpoint(vec![rec("A", 3000.0), rec("B", 1000.0), rec("C", 2000.0)]);
        let order: Vec<_> = out.iter().map(|r| (r.region.as_str(), r.key)).collect();
        assert_eq!(order, vec![("B", 1), ("C", 2), ("A", 3)]);
    }

    #[test]
    fn ties_keep_input_order() {
        let out = rank_by_highpoint(vec![rec("first", 1500.0), rec("low", 100.0), rec("second", 1500.0)]);
        assert_eq!(out[1].region, "first");
        assert_eq!(out[2].region, "second");
    }

    #[test]
    fn extent() {
        assert_eq!(key_extent(&[]), None);
        let out = rank_by_highpoint(vec![rec("A", 1.0), rec("B", 2.0)]);
        assert_eq!(key_extent(&out), Some((1, 2)));
    }
}
