//! Fixed-width ASCII chart comparing each category's share of total expenses.

use crate::errors::ChartError;

/// Column width for each category in the chart body.
const COL_WIDTH: usize = 3;
/// Width of the threshold gutter, `"100|"` at its widest.
const INDENT: usize = 4;

/// Read-only view of a category the chart can plot.
pub trait ExpenseSource {
    fn label(&self) -> &str;
    fn expenses(&self) -> f64;
}

/// Renders the vertical percentage bar chart for the given categories, in
/// input order. Reads the categories, never mutates them.
///
/// Each category's share is `floor(expenses / total * 100)`, truncated toward
/// zero rather than rounded, so a category at 57.9% plots as 57%.
///
/// Input is validated before any division: an empty slice yields
/// [`ChartError::NoCategories`] and a non-positive total yields
/// [`ChartError::NoExpenses`].
pub fn create_spend_chart<S: ExpenseSource>(categories: &[S]) -> Result<String, ChartError> {
    if categories.is_empty() {
        return Err(ChartError::NoCategories);
    }
    let total_spending: f64 = categories.iter().map(|category| category.expenses()).sum();
    if total_spending <= 0.0 {
        return Err(ChartError::NoExpenses);
    }

    let percentages: Vec<u32> = categories
        .iter()
        .map(|category| (category.expenses() / total_spending * 100.0) as u32)
        .collect();
    let labels: Vec<&str> = categories.iter().map(|category| category.label()).collect();
    let max_label_length = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut printout = vec!["Percentage spent by category".to_string()];

    for threshold in (0..=100u32).rev().step_by(10) {
        let mut row = format!("{:>width$}", format!("{threshold}|"), width = INDENT);
        for percentage in &percentages {
            if *percentage >= threshold {
                row.push_str(&format!("{:^width$}", 'o', width = COL_WIDTH));
            } else {
                row.push_str(&" ".repeat(COL_WIDTH));
            }
        }
        row.push(' ');
        printout.push(row);
    }

    let body_width = printout
        .last()
        .map(|row| row.chars().count())
        .unwrap_or(INDENT);
    let mut divider = " ".repeat(INDENT);
    divider.push_str(&"-".repeat(body_width - INDENT));
    printout.push(divider);

    for index in 0..max_label_length {
        let mut row = " ".repeat(INDENT);
        for label in &labels {
            match label.chars().nth(index) {
                Some(ch) => row.push_str(&format!("{:^width$}", ch, width = COL_WIDTH)),
                None => row.push_str(&" ".repeat(COL_WIDTH)),
            }
        }
        row.push(' ');
        printout.push(row);
    }

    Ok(printout.join("\n"))
}
