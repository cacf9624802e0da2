use chrono::Month;

use crate::error::{ChartError, ChartResult};

/// Maps a point's category to the short text drawn under the axis.
///
/// Categories outside the lookup's domain are a caller data-contract
/// violation and must be reported as `ChartError::UnknownCategory`.
pub trait CategoryLabels {
    fn label(&self, category: usize) -> ChartResult<String>;
}

impl<F> CategoryLabels for F
where
    F: Fn(usize) -> ChartResult<String>,
{
    fn label(&self, category: usize) -> ChartResult<String> {
        self(category)
    }
}

/// Three-letter English month names for categories `0..=11` (`0` is January).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthAbbreviations;

impl MonthAbbreviations {
    pub const SUPPORTED: usize = 12;
}

impl CategoryLabels for MonthAbbreviations {
    fn label(&self, category: usize) -> ChartResult<String> {
        let month = category
            .checked_add(1)
            .and_then(|number| u8::try_from(number).ok())
            .and_then(|number| Month::try_from(number).ok())
            .ok_or(ChartError::UnknownCategory {
                category,
                supported: Self::SUPPORTED,
            })?;
        Ok(month.name().chars().take(3).collect())
    }
}

/// Renders the category index itself as the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexLabels;

impl CategoryLabels for IndexLabels {
    fn label(&self, category: usize) -> ChartResult<String> {
        Ok(category.to_string())
    }
}
