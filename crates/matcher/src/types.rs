use listing::coerce_number;
use serde::{Deserialize, Serialize};

/// Raw search form values as submitted by the user.
///
/// Field names mirror the search form inputs (`make`, `model`, `year`,
/// `enginesize`). A field that was not submitted at all is `None`; a field
/// that was submitted blank is `Some("")` and is treated as absent by
/// [`SearchQuery::from_form`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub make: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub enginesize: Option<String>,
}

impl SearchForm {
    /// Whether any search field was submitted, even blank.
    pub fn is_submitted(&self) -> bool {
        self.make.is_some() || self.model.is_some() || self.year.is_some() || self.enginesize.is_some()
    }
}

/// Engine size constraint: the trimmed query text plus its numeric reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineQuery {
    /// Trimmed query text, used for substring fallback.
    pub text: String,
    /// Numeric value when the text coerces cleanly (`"1800"`, `"1.8"`).
    pub numeric: Option<f64>,
}

impl EngineQuery {
    pub fn new(text: &str) -> Self {
        let text = text.trim().to_string();
        let numeric = coerce_number(&text);
        Self { text, numeric }
    }
}

/// A normalized search query.
///
/// Every constraint is optional; an absent constraint matches every record.
/// `make` and `model` are stored trimmed and lower-cased, `year` trimmed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub engine_size: Option<EngineQuery>,
}

impl SearchQuery {
    /// Build a query from raw form values.
    pub fn from_form(form: &SearchForm) -> Self {
        Self {
            make: present(form.make.as_deref()).map(str::to_lowercase),
            model: present(form.model.as_deref()).map(str::to_lowercase),
            year: present(form.year.as_deref()).map(str::to_string),
            engine_size: present(form.enginesize.as_deref()).map(EngineQuery::new),
        }
    }

    /// Builder for a make constraint.
    pub fn with_make(mut self, make: &str) -> Self {
        self.make = present(Some(make)).map(str::to_lowercase);
        self
    }

    /// Builder for a model constraint.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = present(Some(model)).map(str::to_lowercase);
        self
    }

    /// Builder for an exact year constraint.
    pub fn with_year(mut self, year: &str) -> Self {
        self.year = present(Some(year)).map(str::to_string);
        self
    }

    /// Builder for an engine size constraint.
    pub fn with_engine_size(mut self, engine: &str) -> Self {
        self.engine_size = present(Some(engine)).map(EngineQuery::new);
        self
    }

    /// True when no constraint is set, i.e. the query matches everything.
    pub fn is_empty(&self) -> bool {
        self.make.is_none() && self.model.is_none() && self.year.is_none() && self.engine_size.is_none()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
