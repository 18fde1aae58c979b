//! The three class normalizers, built and passed around together.

use serde_json::{Map, Value};
use tracing::{debug, info_span};

use ticket_model::{EntityClass, TicketRecord};

use crate::classes::ClassProfile;
use crate::config::NormalizerConfig;
use crate::engine::Normalizer;
use crate::error::Result;

/// Company, category and template normalizers sharing one configuration.
pub struct NormalizerSet {
    pub company: Normalizer,
    pub category: Normalizer,
    pub template: Normalizer,
}

impl NormalizerSet {
    /// Load every class from the configured mappings directory.
    pub fn open(config: &NormalizerConfig) -> Result<Self> {
        let thresholds = config.thresholds()?;
        let layout = config.layout();
        let build = |class: EntityClass| {
            let mut normalizer = Normalizer::new(
                ClassProfile::for_class(class),
                thresholds,
                layout.store_for(class),
            );
            if config.seed_vocabulary {
                normalizer.seed_vocabulary();
            }
            normalizer
        };
        Ok(Self {
            company: build(EntityClass::Company),
            category: build(EntityClass::Category),
            template: build(EntityClass::Template),
        })
    }

    pub fn get(&self, class: EntityClass) -> &Normalizer {
        match class {
            EntityClass::Company => &self.company,
            EntityClass::Category => &self.category,
            EntityClass::Template => &self.template,
        }
    }

    pub fn get_mut(&mut self, class: EntityClass) -> &mut Normalizer {
        match class {
            EntityClass::Company => &mut self.company,
            EntityClass::Category => &mut self.category,
            EntityClass::Template => &mut self.template,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Normalizer> {
        [&self.company, &self.category, &self.template].into_iter()
    }

    /// Total pending reviews across classes.
    pub fn pending_count(&self) -> usize {
        self.iter()
            .map(|normalizer| normalizer.pending_reviews().len())
            .sum()
    }

    /// Normalize the labelled fields of a record. Absent or empty fields are
    /// left as they are; every other field is copied unchanged.
    pub fn normalize_record(&mut self, record: &TicketRecord) -> TicketRecord {
        let mut normalized = record.clone();
        for class in EntityClass::ALL {
            let field = normalized.field_mut(class);
            if let Some(raw) = field.as_deref()
                && !raw.is_empty()
            {
                *field = Some(self.get_mut(class).normalize_checked(raw));
            }
        }
        normalized
    }

    /// Normalize records inside a JSON document in place.
    ///
    /// Accepts an array of records, a single record, or an object whose
    /// array-valued fields hold records. Returns the number of records
    /// touched.
    pub fn normalize_document(&mut self, document: &mut Value) -> usize {
        let _span = info_span!("normalize_document").entered();
        let count = match document {
            Value::Array(items) => self.normalize_items(items),
            Value::Object(object) => {
                let mut count = 0;
                if TicketRecord::is_ticket_object(object) {
                    self.normalize_object(object);
                    count += 1;
                }
                for value in object.values_mut() {
                    if let Value::Array(items) = value {
                        count += self.normalize_items(items);
                    }
                }
                count
            }
            _ => 0,
        };
        debug!(records = count, "normalized document");
        count
    }

    /// Save every class. Returns `true` only if all saves succeeded.
    pub fn save_all(&self) -> bool {
        self.iter()
            .map(Normalizer::save)
            .fold(true, |all, saved| all && saved)
    }

    fn normalize_items(&mut self, items: &mut [Value]) -> usize {
        let mut count = 0;
        for item in items {
            if let Value::Object(object) = item
                && TicketRecord::is_ticket_object(object)
            {
                self.normalize_object(object);
                count += 1;
            }
        }
        count
    }

    fn normalize_object(&mut self, object: &mut Map<String, Value>) {
        for class in EntityClass::ALL {
            if let Some(Value::String(raw)) = object.get_mut(TicketRecord::field_name(class))
                && !raw.is_empty()
            {
                *raw = self.get_mut(class).normalize_checked(raw);
            }
        }
    }
}
