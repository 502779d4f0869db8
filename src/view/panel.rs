//! Edit side panel bound to at most one country.

use crate::model::Country;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PanelError {
    #[error("save country {country_id}: not implemented")]
    NotImplemented { country_id: i32 },
    #[error("no country selected")]
    NothingBound,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditPanel {
    /// Form pre-filled with the bound record's name.
    Bound { country: Country, draft: String },
    /// Placeholder shown when opened for create.
    Empty,
}

impl EditPanel {
    pub fn for_country(country: Option<&Country>) -> Self {
        match country {
            Some(c) => EditPanel::Bound {
                country: c.clone(),
                draft: c.country.clone(),
            },
            None => EditPanel::Empty,
        }
    }

    pub fn set_draft(&mut self, name: impl Into<String>) {
        if let EditPanel::Bound { draft, .. } = self {
            *draft = name.into();
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditPanel::Bound { draft, .. } => Some(draft),
            EditPanel::Empty => None,
        }
    }

    /// Save is not wired to any endpoint; the record is never modified.
    // TODO: send the draft to PUT /api/countries/:country_id, then close the panel and reload the list.
    pub fn save(&self) -> Result<(), PanelError> {
        match self {
            EditPanel::Bound { country, .. } => Err(PanelError::NotImplemented {
                country_id: country.country_id,
            }),
            EditPanel::Empty => Err(PanelError::NothingBound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn chile() -> Country {
        Country {
            country_id: 22,
            country: "Chile".into(),
            last_update: Utc::now(),
        }
    }

    #[test]
    fn bound_panel_prefills_name() {
        let panel = EditPanel::for_country(Some(&chile()));
        assert_eq!(panel.draft(), Some("Chile"));
    }

    #[test]
    fn save_is_an_explicit_gap() {
        let mut panel = EditPanel::for_country(Some(&chile()));
        panel.set_draft("República de Chile");
        assert_eq!(panel.save(), Err(PanelError::NotImplemented { country_id: 22 }));
        match &panel {
            EditPanel::Bound { country, draft } => {
                assert_eq!(country.country, "Chile");
                assert_eq!(draft, "República de Chile");
            }
            EditPanel::Empty => panic!("panel lost its record"),
        }
    }

    #[test]
    fn empty_panel_has_nothing_to_save() {
        let mut panel = EditPanel::for_country(None);
        panel.set_draft("ignored");
        assert_eq!(panel.draft(), None);
        assert_eq!(panel.save(), Err(PanelError::NothingBound));
    }
}
