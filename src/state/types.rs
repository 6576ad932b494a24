//! Core value types used by eventfeed state.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog item as shown in listings and search results.
///
/// Wire spelling differs between API versions (`posterUrl` vs `poster_image`,
/// `availableSeats` vs `available_seats`, and `id` may arrive as a JSON
/// number); the serde attributes here normalize all of them so only this one
/// shape exists past the adapter boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Opaque unique identifier within a result set.
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    /// Display title.
    pub title: String,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Poster image URL (either wire spelling).
    #[serde(default, alias = "poster_image")]
    pub poster_url: String,
    /// Category label from the externally-defined set.
    #[serde(default)]
    pub category: String,
    /// Calendar date string as reported by the server.
    #[serde(default)]
    pub date: String,
    /// Time-of-day string.
    #[serde(default)]
    pub time: String,
    /// Venue name.
    #[serde(default)]
    pub venue: String,
    /// City or free-form location.
    #[serde(default)]
    pub location: String,
    /// Organizer name.
    #[serde(default)]
    pub organizer: String,
    /// Remaining seat count.
    #[serde(default, alias = "available_seats")]
    pub available_seats: u32,
    /// Ticket price.
    #[serde(default)]
    pub price: f64,
}

/// Accept an event id as either a JSON string or a JSON number.
fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        /// Id already on the wire as a string.
        Text(String),
        /// Numeric id from older API versions.
        Number(u64),
    }
    Ok(match IdRepr::deserialize(deserializer)? {
        IdRepr::Text(s) => s,
        IdRepr::Number(n) => n.to_string(),
    })
}

/// One page's worth of the catalog, normalized from either endpoint.
///
/// Produced fresh by each API call and never mutated; the pagination
/// controller merges `events` into its accumulated list.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginatedResult {
    /// Page-local events in server order.
    pub events: Vec<Event>,
    /// Total pages for the criteria that produced this page.
    pub total_pages: u32,
    /// 1-based page number of this result.
    pub current_page: u32,
    /// Total matching events across all pages.
    pub total_events: u32,
}

/// The active filter snapshot.
///
/// Immutable once constructed: changing any field means building a new value,
/// which starts a new search sequence and logically discards in-flight
/// requests tied to the old one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryCriteria {
    /// Category filter, when a category chip is selected.
    pub category: Option<String>,
    /// Free-text query (post-debounce).
    pub free_text: Option<String>,
    /// Location filter.
    pub location: Option<String>,
    /// Inclusive minimum price.
    pub min_price: Option<f64>,
    /// Inclusive maximum price.
    pub max_price: Option<f64>,
}

impl QueryCriteria {
    /// Criteria filtering on a single category, as the home screen issues.
    pub fn for_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Set the price bounds, ordering the pair so `min_price <= max_price`
    /// always holds.
    #[must_use]
    pub fn with_price_range(mut self, a: f64, b: f64) -> Self {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        self.min_price = Some(lo);
        self.max_price = Some(hi);
        self
    }

    /// Whether any field beyond the category is populated.
    ///
    /// Category-only criteria go through the plain listing path; anything
    /// else requires the search endpoint.
    pub fn needs_search_endpoint(&self) -> bool {
        self.free_text.as_deref().is_some_and(|q| !q.trim().is_empty())
            || self.location.as_deref().is_some_and(|l| !l.trim().is_empty())
            || self.min_price.is_some()
            || self.max_price.is_some()
    }
}

/// Immutable stamp carried by every in-flight request.
///
/// On completion the controller compares the tag against its current criteria
/// and expected page; mismatches are stale responses and are discarded. This
/// replaces any "latest wins" assumption with an explicit, testable guard.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTag {
    /// Criteria snapshot the request was issued for.
    pub criteria: QueryCriteria,
    /// 1-based page the request targets.
    pub page: u32,
}

#[cfg(test)]
mod tests {
    use super::{Event, QueryCriteria};

    #[test]
    /// What: Event JSON decodes with camelCase field names.
    ///
    /// - Input: Search-endpoint style event object
    /// - Output: All fields populated, id kept as string
    fn event_decodes_camel_case_wire() {
        let e: Event = serde_json::from_str(
            r#"{
                "id": "ev-1",
                "title": "Jazz Night",
                "description": "Live jazz",
                "posterUrl": "https://cdn.example/j.jpg",
                "category": "Music",
                "date": "2026-03-01",
                "time": "20:00",
                "venue": "Blue Hall",
                "location": "Berlin",
                "organizer": "Blue Hall e.V.",
                "availableSeats": 42,
                "price": 19.5
            }"#,
        )
        .expect("decode");
        assert_eq!(e.id, "ev-1");
        assert_eq!(e.poster_url, "https://cdn.example/j.jpg");
        assert_eq!(e.available_seats, 42);
        assert!((e.price - 19.5).abs() < f64::EPSILON);
    }

    #[test]
    /// What: Legacy wire spellings and numeric ids normalize at the boundary.
    ///
    /// - Input: `poster_image`, `available_seats`, numeric `id`, missing
    ///   optional fields
    /// - Output: Same normalized shape as the camelCase wire
    fn event_decodes_legacy_wire_spellings() {
        let e: Event = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Street Food Fair",
                "poster_image": "https://cdn.example/f.jpg",
                "available_seats": 0
            }"#,
        )
        .expect("decode");
        assert_eq!(e.id, "7");
        assert_eq!(e.poster_url, "https://cdn.example/f.jpg");
        assert_eq!(e.available_seats, 0);
        assert!(e.description.is_empty());
        assert!(e.category.is_empty());
    }

    #[test]
    /// What: Price range constructor orders an inverted pair.
    ///
    /// - Input: min 50, max 10
    /// - Output: min_price 10, max_price 50
    fn criteria_price_range_orders_pair() {
        let c = QueryCriteria::default().with_price_range(50.0, 10.0);
        assert_eq!(c.min_price, Some(10.0));
        assert_eq!(c.max_price, Some(50.0));
    }

    #[test]
    /// What: Endpoint routing predicate ignores blank text fields.
    ///
    /// - Input: category-only criteria; criteria with whitespace free text;
    ///   criteria with a real location
    /// - Output: Only the last one needs the search endpoint
    fn criteria_search_endpoint_predicate() {
        assert!(!QueryCriteria::for_category("Music").needs_search_endpoint());
        let blank = QueryCriteria {
            free_text: Some("   ".into()),
            ..QueryCriteria::default()
        };
        assert!(!blank.needs_search_endpoint());
        let located = QueryCriteria {
            location: Some("Berlin".into()),
            ..QueryCriteria::default()
        };
        assert!(located.needs_search_endpoint());
    }
}
