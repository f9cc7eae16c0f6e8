use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::Serialize;

static RULES_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/(\d+)").expect("motif de règles invalide"));

/// One parsed row of the source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawRecord {
    pub date: String,
    pub numbers: Vec<u32>,
    pub pick_count: u32,
    pub pool_size: u32,
    pub complementary: Option<u32>,
    pub lucky: Option<u32>,
    pub rules: String,
}

impl DrawRecord {
    pub fn drawn_count(&self) -> usize {
        self.numbers.len()
    }

    /// Numbers falling outside `1..=pool_size`.
    pub fn out_of_pool(&self) -> Vec<u32> {
        self.numbers
            .iter()
            .copied()
            .filter(|&n| n == 0 || n > self.pool_size)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub records: Vec<DrawRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn lucky_draw_count(&self) -> usize {
        self.records.iter().filter(|r| r.lucky.is_some()).count()
    }

    pub fn drawn_numbers_total(&self) -> usize {
        self.records.iter().map(DrawRecord::drawn_count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NumberStats {
    pub number: u32,
    pub times: u32,
    pub probability: f64,
}

/// The `<pick>/<pool>` notation embedded in a rules string, e.g. "6/42".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    pub pick_count: u32,
    pub pool_size: u32,
}

impl Rules {
    pub fn parse(text: &str) -> Result<Rules> {
        let mut matches = RULES_PATTERN.captures_iter(text);
        let Some(caps) = matches.next() else {
            bail!("Aucun motif <tirés>/<total> dans les règles '{}'", text);
        };
        if matches.next().is_some() {
            log::warn!("Plusieurs motifs dans les règles '{}', le premier est retenu", text);
        }

        let pick_count = caps[1]
            .parse::<u32>()
            .with_context(|| format!("Nombre de numéros tirés invalide dans '{}'", text))?;
        let pool_size = caps[2]
            .parse::<u32>()
            .with_context(|| format!("Taille du pool invalide dans '{}'", text))?;

        Ok(Rules {
            pick_count,
            pool_size,
        })
    }
}
