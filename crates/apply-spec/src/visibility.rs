use serde_json::Value;

use crate::field::Field;

/// Whether fields gated off by the current data are returned (flagged
/// `is_conditional`) or dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisibilityMode {
    #[default]
    VisibleOnly,
    ShowAll,
}

impl VisibilityMode {
    pub fn from_show_all(show_all: bool) -> Self {
        if show_all {
            VisibilityMode::ShowAll
        } else {
            VisibilityMode::VisibleOnly
        }
    }
}

/// Marks every candidate not named in `visible` as conditional and returns
/// either all candidates or only the visible ones, preserving candidate
/// order.
pub fn conditional_fields(
    candidates: Vec<Field>,
    visible: &[&str],
    mode: VisibilityMode,
) -> Vec<Field> {
    candidates
        .into_iter()
        .filter_map(|mut field| {
            let is_visible = visible.contains(&field.name.as_str());
            field.is_conditional = !is_visible;
            match (is_visible, mode) {
                (true, _) | (false, VisibilityMode::ShowAll) => Some(field),
                (false, VisibilityMode::VisibleOnly) => None,
            }
        })
        .collect()
}

/// Names of the candidates whose schema is not stripped under `data`.
pub fn visible_under<'a>(candidates: &'a [Field], data: &Value) -> Vec<&'a str> {
    candidates
        .iter()
        .filter(|field| field.is_included(data))
        .map(|field| field.name.as_str())
        .collect()
}
