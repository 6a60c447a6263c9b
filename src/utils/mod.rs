use chrono::{Datelike, NaiveDate};
use std::path::PathBuf;

/// Default CSV name for a scrape taken on `date`, e.g. `dk_moneylines_9_4_2024.csv`.
/// Month and day are not zero padded.
pub fn dated_output_path(date: NaiveDate) -> PathBuf {
    PathBuf::from(format!(
        "dk_moneylines_{}_{}_{}.csv",
        date.month(),
        date.day(),
        date.year()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_output_path() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 4).unwrap();
        assert_eq!(dated_output_path(date), PathBuf::from("dk_moneylines_9_4_2024.csv"));

        let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
        assert_eq!(dated_output_path(date), PathBuf::from("dk_moneylines_12_25_2024.csv"));
    }
}
