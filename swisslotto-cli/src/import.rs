use anyhow::{Context, Result};
use std::path::Path;

use swisslotto_db::csv::StringRecord;
use swisslotto_db::models::{Dataset, DrawRecord, Rules};
use swisslotto_db::source::open_source;

const DATE: usize = 0;
const NUMBERS: usize = 1;
const COMPLEMENTARY: usize = 2;
const LUCKY: usize = 3;
const RULES: usize = 4;

/// Parses `[n, n, n]` or a bare `n,n,n` list.
pub fn parse_numbers(raw: &str) -> Result<Vec<u32>> {
    raw.split(',')
        .map(|part| {
            let cleaned: String = part.chars().filter(|c| !c.is_whitespace()).collect();
            let cleaned = cleaned.trim_start_matches('[').trim_end_matches(']');
            cleaned
                .parse::<u32>()
                .with_context(|| format!("Impossible de convertir '{}' en numéro", part.trim()))
        })
        .collect()
}

/// Empty field is `None`, never 0.
pub fn parse_optional(raw: &str) -> Result<Option<u32>> {
    let s = raw.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<u32>()
        .map(Some)
        .with_context(|| format!("Impossible de parser '{}'", s))
}

fn field<'a>(record: &'a StringRecord, idx: usize, name: &str) -> Result<&'a str> {
    record
        .get(idx)
        .with_context(|| format!("Champ '{}' manquant (colonne {})", name, idx))
}

fn is_comment(record: &StringRecord) -> bool {
    record.get(DATE).is_some_and(|f| f.starts_with('#'))
}

fn parse_record(record: &StringRecord) -> Result<DrawRecord> {
    let date = field(record, DATE, "date")?.to_string();

    let numbers = parse_numbers(field(record, NUMBERS, "numéros")?)
        .context("Champ 'numéros' invalide")?;
    let complementary = parse_optional(field(record, COMPLEMENTARY, "complémentaire")?)
        .context("Champ 'complémentaire' invalide")?;
    let lucky = parse_optional(field(record, LUCKY, "numéro chance")?)
        .context("Champ 'numéro chance' invalide")?;

    let rules = field(record, RULES, "règles")?.to_string();
    let Rules {
        pick_count,
        pool_size,
    } = Rules::parse(&rules).context("Champ 'règles' invalide")?;

    Ok(DrawRecord {
        date,
        numbers,
        pick_count,
        pool_size,
        complementary,
        lucky,
        rules,
    })
}

/// Reads the whole source into memory. The first malformed row aborts the
/// load; only `#` rows are skipped.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let mut reader = open_source(path)?;
    let mut records = Vec::new();

    for (idx, record_result) in reader.records().enumerate() {
        let record = record_result
            .with_context(|| format!("Erreur lecture de la source après la ligne {}", idx))?;
        let line = record.position().map_or(idx as u64 + 1, |p| p.line());

        if is_comment(&record) {
            log::debug!("Ligne {line} ignorée (commentaire)");
            continue;
        }

        let draw = parse_record(&record)
            .with_context(|| format!("Erreur parsing ligne {line}"))?;

        let outside = draw.out_of_pool();
        if !outside.is_empty() {
            log::warn!(
                "Ligne {line} : numéros {:?} hors du pool 1-{}",
                outside,
                draw.pool_size
            );
        }

        records.push(draw);
    }

    log::info!("{} tirages chargés depuis {}", records.len(), path.display());
    Ok(Dataset { records })
}
