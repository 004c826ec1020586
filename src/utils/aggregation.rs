use crate::types::DailyPoint;

/// Thin a cumulative series down to at most `target_points` points.
///
/// Each window keeps its last point, so the running total at every kept date
/// stays exact and the final total is preserved.
pub fn thin_series(data: &[DailyPoint], target_points: usize) -> Vec<DailyPoint> {
    if target_points == 0 || data.len() <= target_points {
        return data.to_vec();
    }

    let window_size = (data.len() as f64 / target_points as f64).ceil() as usize;
    data.chunks(window_size)
        .filter_map(|chunk| chunk.last().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn series(values: &[i64]) -> Vec<DailyPoint> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        values
            .iter()
            .enumerate()
            .map(|(i, v)| DailyPoint {
                date: start + chrono::Days::new(i as u64),
                cumulative_xp: *v,
            })
            .collect()
    }

    #[test]
    fn test_no_thinning_needed() {
        let data = series(&[10, 30]);
        assert_eq!(thin_series(&data, 5), data);
    }

    #[test]
    fn test_keeps_last_of_each_window() {
        let data = series(&[10, 30, 60, 100]);
        let result = thin_series(&data, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0], data[1]);
        assert_eq!(result[1], data[3]);
    }

    #[test]
    fn test_uneven_windows_keep_final_total() {
        let data = series(&[10, 30, 60, 100, 150]);
        // ceil(5/2) = 3: windows [0,1,2] and [3,4]
        let result = thin_series(&data, 2);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].cumulative_xp, 60);
        assert_eq!(result[1].cumulative_xp, 150);
    }

    #[test]
    fn test_empty_data() {
        assert!(thin_series(&[], 5).is_empty());
    }
}
