//! Interleave request and result types.

/// Two strings to merge, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterleaveRequest {
    pub a: String,
    pub b: String,
}

impl InterleaveRequest {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: b.into(),
        }
    }
}

/// The merged string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterleaveResult {
    pub merged: String,
}

impl InterleaveResult {
    /// Interleave the two strings of `request`.
    pub fn from_request(request: &InterleaveRequest) -> Self {
        Self {
            merged: crate::interleave::interleave(&request.a, &request.b),
        }
    }
}
