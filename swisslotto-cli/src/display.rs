use comfy_table::{Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use std::io::{self, Write};

use crate::analysis::Report;
use crate::analysis::frequency::FrequencyTable;
use swisslotto_db::models::DrawRecord;

const RULE: &str = "###############################";
const TAIL_NOTE: &str = " --> moins probable, pas toujours présent";

pub fn render_plain<W: Write>(report: &Report, tail_threshold: u32, out: &mut W) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "Résultats... [ tirages {} ]", report.total_draws)?;
    writeln!(out, "{RULE}")?;
    write_block(out, &report.main, Some(tail_threshold))?;

    writeln!(out, "{RULE}")?;
    writeln!(out, "Numéros chance... [ tirages {} ]", report.lucky.draws)?;
    writeln!(out, "{RULE}")?;
    if report.lucky.draws == 0 {
        writeln!(out, "Aucun tirage avec numéro chance.")?;
        return Ok(());
    }
    write_block(out, &report.lucky, None)
}

fn write_block<W: Write>(out: &mut W, table: &FrequencyTable, tail_threshold: Option<u32>) -> io::Result<()> {
    for stat in &table.stats {
        write!(
            out,
            "{}\t: {}% ( times: {} )",
            stat.number,
            stat.probability * 100.0,
            stat.times
        )?;
        if tail_threshold.is_some_and(|t| stat.number > t) {
            write!(out, "{TAIL_NOTE}")?;
        }
        writeln!(out)?;
    }
    writeln!(out, "-\t: {}%", table.total_probability() * 100.0)
}

pub fn display_report_table(report: &Report, tail_threshold: u32) {
    println!("\n🎯 Fréquences sur {} tirages\n", report.total_draws);

    println!("── Numéros ──");
    display_frequency_table(&report.main, Some(tail_threshold));

    println!("\n── Numéros chance ({} tirages) ──", report.lucky.draws);
    if report.lucky.draws == 0 {
        println!("Aucun tirage avec numéro chance.");
        return;
    }
    display_frequency_table(&report.lucky, None);
}

fn display_frequency_table(freq: &FrequencyTable, tail_threshold: Option<u32>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Probabilité", "Sorties", "Note"]);

    for stat in &freq.stats {
        let tail = tail_threshold.is_some_and(|t| stat.number > t);
        let (note, color) = if tail {
            ("pas toujours présent", Color::Yellow)
        } else {
            ("", Color::White)
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", stat.number)).fg(color),
            Cell::new(format!("{:.4} %", stat.probability * 100.0)),
            Cell::new(stat.times.to_string()),
            Cell::new(note).fg(color),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(format!("{:.4} %", freq.total_probability() * 100.0)),
        Cell::new(""),
        Cell::new(""),
    ]);
    println!("{table}");
}

pub fn display_draws(draws: &[DrawRecord]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Numéros", "Complémentaire", "Chance", "Règle"]);

    let optional = |n: Option<u32>| n.map_or_else(|| "—".to_string(), |v| v.to_string());

    for draw in draws {
        let numbers_str = draw
            .numbers
            .iter()
            .map(|n| format!("{:2}", n))
            .collect::<Vec<_>>()
            .join(" - ");

        table.add_row(vec![
            draw.date.clone(),
            numbers_str,
            optional(draw.complementary),
            optional(draw.lucky),
            format!("{}/{}", draw.pick_count, draw.pool_size),
        ]);
    }

    println!("{table}");
}
