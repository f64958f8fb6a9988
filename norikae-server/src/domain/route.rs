//! Route query and result types.

use std::fmt;

use super::TransitNetwork;

/// Display label for [`ResolvedLine::NoMatch`].
pub const NO_MATCH_LABEL: &str = "no match";

/// A start/destination pair as typed by the user.
///
/// Both strings are kept exactly as received: no trimming, no case
/// folding, no Unicode normalization. An empty string means the field was
/// not provided.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteQuery {
    pub start: String,
    pub destination: String,
}

impl RouteQuery {
    pub fn new(start: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            destination: destination.into(),
        }
    }

    /// Whether `station` is the start or the destination.
    ///
    /// Empty query fields never match, not even a station with an empty name.
    pub fn matches(&self, station: &str) -> bool {
        self.is_start(station) || self.is_destination(station)
    }

    pub fn is_start(&self, station: &str) -> bool {
        !self.start.is_empty() && self.start == station
    }

    pub fn is_destination(&self, station: &str) -> bool {
        !self.destination.is_empty() && self.destination == station
    }
}

/// Which line the query resolved to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ResolvedLine {
    /// Name of the first line serving the start or destination.
    Line(String),
    /// No line serves either station.
    #[default]
    NoMatch,
}

impl ResolvedLine {
    /// The line name, or [`NO_MATCH_LABEL`].
    pub fn as_str(&self) -> &str {
        match self {
            ResolvedLine::Line(name) => name,
            ResolvedLine::NoMatch => NO_MATCH_LABEL,
        }
    }

    /// The line at `index` in `network`, or `NoMatch` for `None`.
    pub fn at(network: &TransitNetwork, index: Option<usize>) -> Self {
        index
            .and_then(|i| network.lines().get(i))
            .map_or(ResolvedLine::NoMatch, |line| {
                ResolvedLine::Line(line.name.clone())
            })
    }

    pub fn is_match(&self) -> bool {
        matches!(self, ResolvedLine::Line(_))
    }
}

impl fmt::Display for ResolvedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the norikae page renders: the fetched network, the query
/// that was asked and the line it resolved to.
///
/// `resolved_line` always names a line in `network` or is
/// [`ResolvedLine::NoMatch`]. `line_index` is the position of that line,
/// `None` exactly when there is no match.
#[derive(Debug, Clone)]
pub struct RouteResult {
    pub network: TransitNetwork,
    pub query: RouteQuery,
    pub resolved_line: ResolvedLine,
    pub line_index: Option<usize>,
}

impl RouteResult {
    /// Resolve `query` against `network`.
    pub fn resolve(network: TransitNetwork, query: RouteQuery) -> Self {
        let line_index = crate::resolve::find_line(&network, &query);
        let resolved_line = ResolvedLine::at(&network, line_index);
        Self {
            network,
            query,
            resolved_line,
            line_index,
        }
    }

    /// Whether the line at `index` is the resolved one.
    pub fn is_current(&self, index: usize) -> bool {
        self.line_index == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    #[test]
    fn empty_fields_never_match() {
        let query = RouteQuery::default();
        assert!(!query.matches(""));
        assert!(!query.matches("Shibuya"));
    }

    #[test]
    fn matches_either_field() {
        let query = RouteQuery::new("Shibuya", "Ueno");
        assert!(query.is_start("Shibuya"));
        assert!(!query.is_destination("Shibuya"));
        assert!(query.is_destination("Ueno"));
        assert!(query.matches("Ueno"));
        assert!(!query.matches("Tokyo"));
    }

    #[test]
    fn matching_is_raw() {
        let query = RouteQuery::new(" Shibuya", "UENO");
        assert!(!query.matches("Shibuya"));
        assert!(!query.matches("Ueno"));
        assert!(query.matches(" Shibuya"));
    }

    #[test]
    fn resolved_line_labels() {
        let line = ResolvedLine::Line("Red".to_string());
        assert_eq!(line.as_str(), "Red");
        assert!(line.is_match());

        assert_eq!(ResolvedLine::NoMatch.to_string(), NO_MATCH_LABEL);
        assert!(!ResolvedLine::NoMatch.is_match());
        assert_eq!(ResolvedLine::default(), ResolvedLine::NoMatch);
    }

    #[test]
    fn line_named_like_sentinel_is_still_a_match() {
        let network = TransitNetwork::new(vec![Line::new(NO_MATCH_LABEL, ["X"])]);
        let result = RouteResult::resolve(network, RouteQuery::new("X", ""));
        assert!(result.resolved_line.is_match());
        assert_eq!(result.resolved_line.as_str(), NO_MATCH_LABEL);
    }

    #[test]
    fn resolve_keeps_network_and_query() {
        let network = TransitNetwork::new(vec![Line::new("Red", ["X", "Y"])]);
        let query = RouteQuery::new("Y", "");
        let result = RouteResult::resolve(network.clone(), query.clone());
        assert_eq!(result.network, network);
        assert_eq!(result.query, query);
        assert_eq!(result.resolved_line, ResolvedLine::Line("Red".to_string()));
        assert_eq!(result.line_index, Some(0));
    }

    #[test]
    fn only_first_same_named_line_is_current() {
        let network = TransitNetwork::new(vec![
            Line::new("Loop", ["A", "B"]),
            Line::new("Loop", ["B", "C"]),
        ]);
        let result = RouteResult::resolve(network, RouteQuery::new("B", ""));
        assert!(result.is_current(0));
        assert!(!result.is_current(1));

        let result = RouteResult::resolve(result.network, RouteQuery::new("Z", ""));
        assert_eq!(result.line_index, None);
        assert!(!result.is_current(0));
    }
}
