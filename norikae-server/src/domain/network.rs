//! Transit network types.

use serde::{Deserialize, Serialize};

/// A named transit line and the stations it serves, in feed order.
///
/// Station order is kept as delivered by the feed. It matters for display
/// but not for matching.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Line {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,

    #[serde(rename = "Stations", alias = "stations")]
    pub stations: Vec<String>,
}

impl Line {
    /// Create a line from a name and its stations.
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        stations: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            stations: stations.into_iter().map(Into::into).collect(),
        }
    }
}

/// Every line returned by the transit feed for one request.
///
/// Decodes directly from the feed's top-level JSON array. The lines are
/// read-only once decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TransitNetwork {
    lines: Vec<Line>,
}

impl TransitNetwork {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Lines in feed order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of station entries across all lines.
    ///
    /// A station shared by two lines is counted twice.
    pub fn station_count(&self) -> usize {
        self.lines.iter().map(|l| l.stations.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_feed_shape() {
        let json = r#"[
            {"Name": "Red", "Stations": ["X", "Y"]},
            {"Name": "Blue", "Stations": ["Y", "Z"]}
        ]"#;

        let network: TransitNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(network.len(), 2);
        assert_eq!(network.lines()[0], Line::new("Red", ["X", "Y"]));
        assert_eq!(network.lines()[1], Line::new("Blue", ["Y", "Z"]));
        assert_eq!(network.station_count(), 4);
    }

    #[test]
    fn decode_accepts_lowercase_keys() {
        let json = r#"[{"name": "山手線", "stations": ["東京", "神田"]}]"#;

        let network: TransitNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(network.lines()[0].name, "山手線");
        assert_eq!(network.lines()[0].stations, vec!["東京", "神田"]);
    }

    #[test]
    fn decode_ignores_unknown_keys() {
        let json = r##"[{"Name": "Red", "Stations": [], "Colour": "#f00"}]"##;

        let network: TransitNetwork = serde_json::from_str(json).unwrap();
        assert_eq!(network.lines()[0], Line::new("Red", Vec::<String>::new()));
    }

    #[test]
    fn decode_rejects_missing_stations() {
        let json = r#"[{"Name": "Red"}]"#;
        assert!(serde_json::from_str::<TransitNetwork>(json).is_err());
    }

    #[test]
    fn decode_rejects_object_root() {
        let json = r#"{"Name": "Red", "Stations": ["X"]}"#;
        assert!(serde_json::from_str::<TransitNetwork>(json).is_err());
    }

    #[test]
    fn decode_empty_array() {
        let network: TransitNetwork = serde_json::from_str("[]").unwrap();
        assert!(network.is_empty());
    }
}
