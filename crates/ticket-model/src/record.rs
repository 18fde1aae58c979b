//! Ticket record exchanged with ingestion collaborators.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entity::EntityClass;

/// One processed support ticket.
///
/// Only the three labelled fields are interpreted; everything else is
/// carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_template: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TicketRecord {
    /// JSON key holding the raw value for a class.
    #[must_use]
    pub const fn field_name(class: EntityClass) -> &'static str {
        match class {
            EntityClass::Company => "company_name",
            EntityClass::Category => "support_category",
            EntityClass::Template => "subject_template",
        }
    }

    #[must_use]
    pub fn field(&self, class: EntityClass) -> Option<&str> {
        match class {
            EntityClass::Company => self.company_name.as_deref(),
            EntityClass::Category => self.support_category.as_deref(),
            EntityClass::Template => self.subject_template.as_deref(),
        }
    }

    pub fn field_mut(&mut self, class: EntityClass) -> &mut Option<String> {
        match class {
            EntityClass::Company => &mut self.company_name,
            EntityClass::Category => &mut self.support_category,
            EntityClass::Template => &mut self.subject_template,
        }
    }

    /// True if the JSON object carries at least one labelled field.
    #[must_use]
    pub fn is_ticket_object(object: &Map<String, Value>) -> bool {
        EntityClass::ALL
            .iter()
            .any(|class| object.contains_key(Self::field_name(*class)))
    }
}
