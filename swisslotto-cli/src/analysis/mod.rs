pub mod frequency;

use anyhow::{Result, bail};
use serde::Serialize;

use swisslotto_db::models::Dataset;

use self::frequency::{FrequencyTable, count_occurrences};

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total_draws: usize,
    pub main: FrequencyTable,
    pub lucky: FrequencyTable,
}

/// Folds every record into the main and lucky frequency tables.
///
/// Main probabilities are normalised by the total count of drawn numbers, so
/// each record weighs by its own size. Lucky probabilities are normalised by
/// the count of records carrying a lucky number.
pub fn aggregate(dataset: &Dataset) -> Result<Report> {
    if dataset.is_empty() {
        bail!("Jeu de données vide : aucun tirage à analyser");
    }

    let main_counts = count_occurrences(
        dataset
            .records
            .iter()
            .flat_map(|r| r.numbers.iter().copied()),
    );
    let lucky_counts = count_occurrences(dataset.records.iter().filter_map(|r| r.lucky));

    let lucky_draws = dataset.lucky_draw_count();

    Ok(Report {
        total_draws: dataset.len(),
        main: FrequencyTable::new(&main_counts, dataset.len(), dataset.drawn_numbers_total()),
        lucky: FrequencyTable::new(&lucky_counts, lucky_draws, lucky_draws),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use swisslotto_db::models::DrawRecord;

    fn draw(numbers: &[u32], lucky: Option<u32>) -> DrawRecord {
        DrawRecord {
            date: "2011-03-05".to_string(),
            numbers: numbers.to_vec(),
            pick_count: numbers.len() as u32,
            pool_size: 45,
            complementary: None,
            lucky,
            rules: format!("{}/45", numbers.len()),
        }
    }

    fn prob_of(table: &FrequencyTable, number: u32) -> f64 {
        table
            .stats
            .iter()
            .find(|s| s.number == number)
            .unwrap()
            .probability
    }

    #[test]
    fn test_two_draws_without_lucky() {
        let dataset = Dataset {
            records: vec![
                draw(&[1, 2, 3, 4, 5, 6], None),
                draw(&[1, 2, 3, 4, 5, 7], None),
            ],
        };
        let report = aggregate(&dataset).unwrap();
        assert_eq!(report.total_draws, 2);

        for n in 1..=5 {
            let stat = report.main.stats.iter().find(|s| s.number == n).unwrap();
            assert_eq!(stat.times, 2);
            assert!((stat.probability - 2.0 / 2.0 / 6.0).abs() < 1e-10);
        }
        assert!((prob_of(&report.main, 6) - 1.0 / 12.0).abs() < 1e-10);
        assert!((prob_of(&report.main, 7) - 1.0 / 12.0).abs() < 1e-10);

        assert!(report.lucky.is_empty());
        assert_eq!(report.lucky.draws, 0);
    }

    #[test]
    fn test_main_sums_to_one() {
        let dataset = Dataset {
            records: vec![
                draw(&[1, 2, 3, 4, 5, 6], Some(1)),
                draw(&[7, 8, 9, 10, 11, 12], None),
                draw(&[1, 8, 15, 22, 29, 36], Some(4)),
            ],
        };
        let report = aggregate(&dataset).unwrap();
        assert!((report.main.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_mixed_draw_sizes_sum_to_one() {
        let dataset = Dataset {
            records: vec![
                draw(&[1, 2, 3, 4, 5, 6], None),
                draw(&[1, 2, 3, 4, 5], None),
                draw(&[10, 20], None),
            ],
        };
        let report = aggregate(&dataset).unwrap();
        assert_eq!(report.main.opportunities, 13);
        assert!((report.main.total_probability() - 1.0).abs() < 1e-10);
        assert!((prob_of(&report.main, 1) - 2.0 / 13.0).abs() < 1e-10);
    }

    #[test]
    fn test_lucky_probabilities() {
        let dataset = Dataset {
            records: vec![
                draw(&[1, 2, 3, 4, 5, 6], Some(3)),
                draw(&[1, 2, 3, 4, 5, 6], None),
                draw(&[1, 2, 3, 4, 5, 6], Some(3)),
                draw(&[1, 2, 3, 4, 5, 6], Some(0)),
            ],
        };
        let report = aggregate(&dataset).unwrap();
        assert_eq!(report.lucky.draws, 3);
        assert!((prob_of(&report.lucky, 3) - 2.0 / 3.0).abs() < 1e-10);
        assert!((prob_of(&report.lucky, 0) - 1.0 / 3.0).abs() < 1e-10);
        assert!((report.lucky.total_probability() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_tables_sorted_ascending() {
        let dataset = Dataset {
            records: vec![
                draw(&[5, 9, 12, 33, 41, 44], Some(2)),
                draw(&[5, 9, 13, 30, 41, 45], Some(5)),
                draw(&[5, 10, 12, 31, 40, 45], Some(2)),
            ],
        };
        let report = aggregate(&dataset).unwrap();
        for table in [&report.main, &report.lucky] {
            for pair in table.stats.windows(2) {
                assert!(pair[0].probability <= pair[1].probability);
                if pair[0].probability == pair[1].probability {
                    assert!(pair[0].number < pair[1].number);
                }
            }
        }
        assert_eq!(report.main.stats.last().unwrap().number, 5);
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let err = aggregate(&Dataset::default()).unwrap_err();
        assert!(err.to_string().contains("vide"));
    }
}
