//! Query phrasing helpers: location detection, place extraction, and the canned fallback replies.

/// True when the lowercased input asks where something is.
pub fn is_location_query(lowered: &str) -> bool {
    lowered.contains("where is") || lowered.contains("location of")
}

/// Place name from a lowercased location query: first "where is" and first "location of"
/// removed.
pub fn extract_place(lowered: &str) -> String {
    subject(lowered, &["where is", "location of"])
}

/// What a query is about: the first occurrence of each phrase removed, trimmed, trailing
/// `?`/`.`/`!` dropped. Used for the geocoding place name and every fallback template.
fn subject(lowered: &str, phrases: &[&str]) -> String {
    phrases
        .iter()
        .fold(lowered.to_string(), |acc, phrase| acc.replacen(phrase, "", 1))
        .trim()
        .trim_end_matches(['?', '.', '!'])
        .trim()
        .to_string()
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Shape of the final "I don't know" reply, picked from the query's phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackShape {
    Location,
    Person,
    Definition,
    Date,
    Generic,
}

impl FallbackShape {
    pub fn of(lowered: &str) -> Self {
        if lowered.contains("where is") || lowered.contains("location") {
            Self::Location
        } else if lowered.contains("who is") || lowered.contains("person") {
            Self::Person
        } else if lowered.contains("what is") || lowered.contains("define") {
            Self::Definition
        } else if lowered.contains("when") || lowered.contains("date") {
            Self::Date
        } else {
            Self::Generic
        }
    }

    /// The canned reply of this shape for `query` (as typed).
    pub fn reply(self, query: &str) -> String {
        let lowered = query.to_lowercase();
        match self {
            Self::Location => format!(
                "{} is a location I don't have specific information about right now. For accurate location information, you could check Google Maps or a geography website.",
                capitalize_first(&extract_place(&lowered))
            ),
            Self::Person => format!(
                "I don't have specific information about {} right now. For biographical information, you might want to check a reliable encyclopedia or search engine.",
                subject(&lowered, &["who is", "person"])
            ),
            Self::Definition => format!(
                "I don't have a specific definition for \"{}\" right now. For accurate definitions, you might want to check a dictionary or encyclopedia.",
                subject(&lowered, &["what is", "define"])
            ),
            Self::Date => "I don't have access to specific historical dates or scheduling information. For historical dates, you might want to check an encyclopedia or history website.".to_string(),
            Self::Generic => format!(
                "I don't have specific information about \"{}\" right now. This might be because I have limited access to external data sources. For the most accurate and up-to-date information, you might want to use a search engine or consult a specialized resource.",
                query
            ),
        }
    }
}

/// Canned reply used when every lookup failed. Never empty.
pub fn fallback_reply(query: &str) -> String {
    FallbackShape::of(&query.to_lowercase()).reply(query)
}
