//! Encoding of caller-supplied values placed in request paths.
//!
//! Object names, record ids and external ids all end up as URL path
//! segments. They are percent-encoded so a value cannot add a slash, a query
//! string or a fragment. `.` and `..` survive encoding (and `%2E` is decoded
//! back by URL parsers), so callers must reject them with
//! [`url::is_dot_segment`] before building a path.
//!
//! ```rust
//! use sforce_client::security::url;
//!
//! let encoded = url::encode_param("001/../../secret");
//! assert_eq!(encoded, "001%2F..%2F..%2Fsecret");
//! assert!(url::is_dot_segment(".."));
//! ```

/// URL path utilities.
pub mod url {
    /// Percent-encode a single path segment.
    #[must_use]
    pub fn encode_param(value: &str) -> String {
        urlencoding::encode(value).into_owned()
    }

    /// Returns true for `.` and `..`, which a URL parser resolves against the
    /// surrounding path instead of keeping as a segment.
    ///
    /// ```rust
    /// use sforce_client::security::url;
    ///
    /// assert!(url::is_dot_segment("."));
    /// assert!(url::is_dot_segment(".."));
    /// assert!(!url::is_dot_segment("..."));
    /// assert!(!url::is_dot_segment("a.b"));
    /// ```
    #[must_use]
    pub fn is_dot_segment(value: &str) -> bool {
        value == "." || value == ".."
    }

    /// Join path segments, encoding each one.
    ///
    /// Segments must not be dot segments; see [`is_dot_segment`].
    ///
    /// ```rust
    /// use sforce_client::security::url;
    ///
    /// assert_eq!(url::join_segments(&["sobjects", "Account", "a b"]), "sobjects/Account/a%20b");
    /// ```
    #[must_use]
    pub fn join_segments(segments: &[&str]) -> String {
        segments
            .iter()
            .map(|s| encode_param(s))
            .collect::<Vec<_>>()
            .join("/")
    }
}
