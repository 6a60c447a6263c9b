//! Pulls team / moneyline pairs out of a DraftKings league page.
//!
//! ## Markup contract
//! Every betting line is rendered as an outcome cell:
//! `<div class="sportsbook-outcome-cell__body no-label" aria-label="TEAM">`.
//! Moneyline cells carry a nested
//! `<span class="sportsbook-odds american no-margin default-color">`
//! holding the price. Spread cells use the same outer class but have no such
//! span, so an empty price is what separates the two.
//!
//! An element matches when its whitespace-separated class list is exactly the
//! expected one, in order. Spacing inside the attribute is irrelevant; extra
//! or reordered classes do not match.

use scraper::{ElementRef, Html, Selector};

use crate::error::ScrapeError;
use crate::models::MoneylineRecord;

const OUTCOME_CELL_CLASSES: &[&str] = &["sportsbook-outcome-cell__body", "no-label"];
const AMERICAN_ODDS_CLASSES: &[&str] = &["sportsbook-odds", "american", "no-margin", "default-color"];
const TEAM_ATTRIBUTE: &str = "aria-label";

pub struct MoneylineExtractor {
    outcome_cell: Selector,
    american_odds: Selector,
}

impl MoneylineExtractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            outcome_cell: compile(&class_selector("div", OUTCOME_CELL_CLASSES))?,
            american_odds: compile(&class_selector("span", AMERICAN_ODDS_CLASSES))?,
        })
    }

    /// Extract moneyline records in document order. A page without outcome
    /// cells yields an empty list.
    pub fn extract(&self, html: &str) -> Vec<MoneylineRecord> {
        let document = Html::parse_document(html);

        let mut records = Vec::new();
        let mut cells = 0usize;

        for cell in document
            .select(&self.outcome_cell)
            .filter(|el| has_exact_classes(*el, OUTCOME_CELL_CLASSES))
        {
            cells += 1;

            let team = cell.value().attr(TEAM_ATTRIBUTE).unwrap_or_default();
            let odds = self.odds_text(cell);

            // Spread cells share the outer class but carry no price
            if odds.is_empty() {
                continue;
            }

            records.push(MoneylineRecord::new(team, odds));
        }

        tracing::debug!(
            "Matched {} outcome cells, kept {} moneylines, skipped {}",
            cells,
            records.len(),
            cells - records.len()
        );

        records
    }

    /// Text of the first odds span inside `cell`, each fragment trimmed.
    fn odds_text(&self, cell: ElementRef<'_>) -> String {
        cell.select(&self.american_odds)
            .find(|span| has_exact_classes(*span, AMERICAN_ODDS_CLASSES))
            .map(|span| span.text().map(str::trim).collect::<String>())
            .unwrap_or_default()
    }
}

/// `tag.a.b.c`: a cheap prefilter that every candidate must pass.
fn class_selector(tag: &str, classes: &[&str]) -> String {
    let mut css = tag.to_string();
    for class in classes {
        css.push('.');
        css.push_str(class);
    }
    css
}

/// True when the raw `class` attribute splits into exactly `expected`.
fn has_exact_classes(element: ElementRef<'_>, expected: &[&str]) -> bool {
    element
        .value()
        .attr("class")
        .map(|raw| raw.split_whitespace().eq(expected.iter().copied()))
        .unwrap_or(false)
}

fn compile(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{}: {:?}", css, e)))
}
