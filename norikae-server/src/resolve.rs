//! Line resolution for the norikae page.
//!
//! Finds the line the user is "on" by scanning the network for the first
//! station that equals either the start or the destination.

use tracing::trace;

use crate::domain::{ResolvedLine, RouteQuery, TransitNetwork};

/// Resolve which line serves the query's start or destination.
///
/// Lines are scanned in feed order and each line's stations in line order.
/// The first station equal to a non-empty query field ends the whole scan
/// and that station's line wins. When start and destination sit on
/// different lines, whichever line comes first in the feed is returned;
/// start does not take priority over destination.
///
/// Comparison is exact: case-sensitive, no trimming, no normalization.
/// An empty query field counts as not provided, so it never matches, not
/// even a station whose name is the empty string.
pub fn resolve_line(network: &TransitNetwork, query: &RouteQuery) -> ResolvedLine {
    ResolvedLine::at(network, find_line(network, query))
}

/// Position in `network` of the line [`resolve_line`] picks.
///
/// Distinguishes the winning line from later lines that share its name.
pub fn find_line(network: &TransitNetwork, query: &RouteQuery) -> Option<usize> {
    for (index, line) in network.lines().iter().enumerate() {
        if let Some(station) = line.stations.iter().find(|s| query.matches(s)) {
            trace!(line = %line.name, index, %station, "resolved line");
            return Some(index);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Line;

    fn red_blue() -> TransitNetwork {
        TransitNetwork::new(vec![
            Line::new("Red", ["X", "Y"]),
            Line::new("Blue", ["Y", "Z"]),
        ])
    }

    fn line(name: &str) -> ResolvedLine {
        ResolvedLine::Line(name.to_string())
    }

    #[test]
    fn first_line_in_feed_order_wins() {
        let query = RouteQuery::new("Y", "");
        assert_eq!(resolve_line(&red_blue(), &query), line("Red"));
    }

    #[test]
    fn destination_only() {
        let query = RouteQuery::new("", "Z");
        assert_eq!(resolve_line(&red_blue(), &query), line("Blue"));
    }

    #[test]
    fn earlier_line_beats_start_priority() {
        // Start is only on Blue, destination is on Red. Red comes first.
        let query = RouteQuery::new("Z", "X");
        assert_eq!(resolve_line(&red_blue(), &query), line("Red"));
    }

    #[test]
    fn station_order_within_line_does_not_change_winner() {
        let network = TransitNetwork::new(vec![
            Line::new("Green", ["A", "B", "C"]),
            Line::new("Yellow", ["C"]),
        ]);
        let query = RouteQuery::new("C", "");
        assert_eq!(resolve_line(&network, &query), line("Green"));
    }

    #[test]
    fn no_match_returns_sentinel() {
        let query = RouteQuery::new("Nowhere", "Elsewhere");
        assert_eq!(resolve_line(&red_blue(), &query), ResolvedLine::NoMatch);
    }

    #[test]
    fn both_empty_returns_sentinel() {
        let network = TransitNetwork::new(vec![Line::new("Ghost", [""])]);
        assert_eq!(
            resolve_line(&network, &RouteQuery::default()),
            ResolvedLine::NoMatch
        );
    }

    #[test]
    fn empty_network_returns_sentinel() {
        let query = RouteQuery::new("X", "Y");
        assert_eq!(
            resolve_line(&TransitNetwork::default(), &query),
            ResolvedLine::NoMatch
        );
    }

    #[test]
    fn comparison_is_case_sensitive_and_untrimmed() {
        assert_eq!(
            resolve_line(&red_blue(), &RouteQuery::new("y", "")),
            ResolvedLine::NoMatch
        );
        assert_eq!(
            resolve_line(&red_blue(), &RouteQuery::new("Y ", "")),
            ResolvedLine::NoMatch
        );
    }

    #[test]
    fn find_line_returns_first_position() {
        let network = TransitNetwork::new(vec![
            Line::new("Loop", ["A"]),
            Line::new("Loop", ["B"]),
            Line::new("Loop", ["B"]),
        ]);
        assert_eq!(find_line(&network, &RouteQuery::new("B", "")), Some(1));
        assert_eq!(find_line(&network, &RouteQuery::new("C", "")), None);
    }

    #[test]
    fn japanese_station_names() {
        let network = TransitNetwork::new(vec![
            Line::new("銀座線", ["渋谷", "表参道", "上野"]),
            Line::new("山手線", ["渋谷", "恵比寿"]),
        ]);
        let query = RouteQuery::new("恵比寿", "");
        assert_eq!(resolve_line(&network, &query), line("山手線"));
    }
}
