//! Formatted output rows shared by every report.

/// One report row: already-formatted cells, printed tab-separated.
pub type Row = Vec<String>;

/// Monetary cell, 2 decimal places.
pub fn money(value: f64) -> String {
    format!("{value:.2}")
}

/// Ratio cell, 6 decimal places (ROI).
pub fn ratio(value: f64) -> String {
    format!("{value:.6}")
}

/// Join a row the way reports print: tab-separated, one row per line.
pub fn tabbed(row: &Row) -> String {
    row.join("\t")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_rounds_to_two_places() {
        assert_eq!(money(108.0), "108.00");
        assert_eq!(money(5.255), "5.25");
        assert_eq!(money(-1.005), "-1.00");
    }

    #[test]
    fn test_ratio_keeps_six_places() {
        assert_eq!(ratio(0.0123456789), "0.012346");
        assert_eq!(ratio(0.0), "0.000000");
    }

    #[test]
    fn test_tabbed_join() {
        let row: Row = vec!["108.00".into(), "Cash in game".into()];
        assert_eq!(tabbed(&row), "108.00\tCash in game");
    }
}
