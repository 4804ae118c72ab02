//! Fixed-width text rendering of report rows.
//!
//! Presentation only: swapping this out never touches scoring.

use std::fmt;

use super::row::DisplayRow;

/// Width of the rule printed under the header.
const RULE_WIDTH: usize = 90;

/// Fixed-width table over a slice of rows.
///
/// ## Example
///
/// ```
/// use card_balance::report::ReportTable;
///
/// let text = ReportTable::new(&[]).to_string();
/// assert!(text.starts_with("NOM"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ReportTable<'a> {
    rows: &'a [DisplayRow],
}

impl<'a> ReportTable<'a> {
    #[must_use]
    pub fn new(rows: &'a [DisplayRow]) -> Self {
        Self { rows }
    }
}

fn write_header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
        f,
        "{:<20} | {:<3} | {:<5} | {:<4} | {:<8} | {:<12} | {:<6} | {:<5}",
        "NOM", "ELQ", "PV", "DPS", "SPD", "RNG", "SCORE", "S/E"
    )?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

fn write_row(f: &mut fmt::Formatter<'_>, row: &DisplayRow) -> fmt::Result {
    write!(
        f,
        "{:<20} | {:<3} | {:<5} | {:<4} | {:<8} | {:<12} | {:<6} | {:<5}",
        row.name, row.cost, row.health, row.dps, row.speed, row.range, row.score, row.ratio
    )?;
    if let Some(label) = row.flag.label() {
        write!(f, " {label}")?;
    }
    writeln!(f)
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f)?;
        for row in self.rows {
            write_row(f, row)?;
        }
        Ok(())
    }
}

/// Render rows as a fixed-width table.
#[must_use]
pub fn render_table(rows: &[DisplayRow]) -> String {
    ReportTable::new(rows).to_string()
}
