//! Responsive arrangement of form fields.

#![allow(missing_docs)]

use super::model::Field;

/// Layout class selected from terminal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutClass {
    /// One field per row.
    Narrow,
    /// Measurements left, income/smoker/city right.
    Wide,
}

/// Rows of fields plus the column width each cell gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormLayout {
    pub class: LayoutClass,
    pub rows: Vec<Vec<Field>>,
    pub column_width: usize,
}

const WIDE_THRESHOLD_COLS: u16 = 72;

/// Classify layout from terminal width.
#[must_use]
pub const fn classify_layout(cols: u16) -> LayoutClass {
    if cols < WIDE_THRESHOLD_COLS {
        LayoutClass::Narrow
    } else {
        LayoutClass::Wide
    }
}

/// Arrange the input fields for a terminal `cols` wide.
///
/// Occupation always spans the full width; the submit button is drawn
/// separately.
#[must_use]
pub fn build_form_layout(cols: u16) -> FormLayout {
    let full_width = usize::from(cols.max(1));
    match classify_layout(cols) {
        LayoutClass::Narrow => FormLayout {
            class: LayoutClass::Narrow,
            rows: Field::ORDER
                .into_iter()
                .filter(|f| *f != Field::Submit)
                .map(|f| vec![f])
                .collect(),
            column_width: full_width,
        },
        LayoutClass::Wide => FormLayout {
            class: LayoutClass::Wide,
            rows: vec![
                vec![Field::Age, Field::IncomeLpa],
                vec![Field::Weight, Field::Smoker],
                vec![Field::Height, Field::City],
                vec![Field::Occupation],
            ],
            column_width: split_columns(full_width, 2),
        },
    }
}

fn split_columns(cols: usize, gutter: usize) -> usize {
    (cols.saturating_sub(gutter) / 2).max(1)
}
