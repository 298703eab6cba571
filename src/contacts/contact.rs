//! Contact record

/// A person parsed from the connections export
///
/// Identity is the full name, which is also what gets searched for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    first_name: String,
    last_name: String,
    full_name: String,
    company: Option<String>,
    position: Option<String>,
}

impl Contact {
    /// Create a contact; blank company or position become `None`
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        company: Option<String>,
        position: Option<String>,
    ) -> Self {
        let first_name = first_name.into().trim().to_string();
        let last_name = last_name.into().trim().to_string();
        let full_name = format!("{} {}", first_name, last_name);

        Self {
            first_name,
            last_name,
            full_name,
            company: non_blank(company),
            position: non_blank(position),
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Name used as the exact-phrase query
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// "Position at Company", with whichever parts are known
    pub fn affiliation(&self) -> Option<String> {
        let parts: Vec<&str> = [self.position(), self.company()]
            .into_iter()
            .flatten()
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" at "))
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
