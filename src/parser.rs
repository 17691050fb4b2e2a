use scraper::{ElementRef, Html, Selector};
use uuid::Uuid;

use crate::types::Standing;

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn cell_text(row: ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .next()
        .map(|e| normalize_whitespace(&elem_text(e)))
        .unwrap_or_default()
}

fn extract_form(row: ElementRef, selector: &Selector) -> String {
    row.select(selector)
        .map(|e| elem_text(e).trim().to_string())
        .collect()
}

/// Walks the standings table and produces one [`Standing`] per body row,
/// in document order. Document order is the published rank order, so no
/// sorting happens here or anywhere downstream.
///
/// Extraction is best-effort per field: a row that matches the table selector
/// but is missing a sub-element gets an empty string for that field rather
/// than failing the row. An entirely empty result is the caller's problem
/// (the scraper treats it as a failed run).
pub fn parse_standings(html: &str) -> Vec<Standing> {
    let document = Html::parse_document(html);

    let row_sel = Selector::parse("table.ssrcss-14j0ip6-Table tbody tr").unwrap();
    let position_sel = Selector::parse("td:nth-child(1) span").unwrap();
    // The visible cell holds a three-letter abbreviation; the full club name
    // lives in the screen-reader span.
    let team_sel = Selector::parse("td:nth-child(2) span.ssrcss-1f39n02-VisuallyHidden").unwrap();
    let played_sel = Selector::parse("td:nth-child(3)").unwrap();
    let won_sel = Selector::parse("td:nth-child(4)").unwrap();
    let drawn_sel = Selector::parse("td:nth-child(5)").unwrap();
    let lost_sel = Selector::parse("td:nth-child(6)").unwrap();
    let goals_for_sel = Selector::parse("td:nth-child(7)").unwrap();
    let goals_against_sel = Selector::parse("td:nth-child(8)").unwrap();
    let goal_difference_sel = Selector::parse("td:nth-child(9)").unwrap();
    let points_sel = Selector::parse("td:nth-child(10) span").unwrap();
    let form_sel =
        Selector::parse("ul.ssrcss-5z9wmy-FormContainer li div[data-testid=\"letter-content\"]")
            .unwrap();

    document
        .select(&row_sel)
        .map(|row| Standing {
            uuid: Uuid::new_v4().to_string(),
            position: cell_text(row, &position_sel),
            team_name: cell_text(row, &team_sel),
            played: cell_text(row, &played_sel),
            won: cell_text(row, &won_sel),
            drawn: cell_text(row, &drawn_sel),
            lost: cell_text(row, &lost_sel),
            goals_for: cell_text(row, &goals_for_sel),
            goals_against: cell_text(row, &goals_against_sel),
            goal_difference: cell_text(row, &goal_difference_sel),
            points: cell_text(row, &points_sel),
            form: extract_form(row, &form_sel),
        })
        .collect()
}
