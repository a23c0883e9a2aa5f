//! Configuration options for report rendering.
//!
//! - [`RenderOptions`]: main configuration struct
//! - [`AbsencePolicy`]: which instance values count as "nothing to show"
//! - [`RowPolicy`]: what to do with row lists whose rows disagree on their keys
//!
//! ## Examples
//!
//! ```rust
//! use content_report::{AbsencePolicy, RenderOptions, RowPolicy};
//!
//! // Show `0` and `false` values, and reject ragged tables.
//! let options = RenderOptions::new()
//!     .with_absence_policy(AbsencePolicy::Missing)
//!     .with_row_policy(RowPolicy::Strict);
//! assert_eq!(options.absence_policy, AbsencePolicy::Missing);
//! ```

/// Decides which field values are skipped entirely.
///
/// # Examples
///
/// ```rust
/// use content_report::{AbsencePolicy, Value};
///
/// assert!(AbsencePolicy::Falsy.is_absent(&Value::from(0)));
/// assert!(!AbsencePolicy::Missing.is_absent(&Value::from(0)));
/// assert!(AbsencePolicy::Missing.is_absent(&Value::from("")));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AbsencePolicy {
    /// Skip null, empty strings, empty lists and mappings, and also `0`, `0.0`
    /// and `false`. Numeric zero and `false` never appear in the report.
    #[default]
    Falsy,
    /// Skip only null, empty strings, empty lists and empty mappings.
    Missing,
}

impl AbsencePolicy {
    /// Returns `true` if `value` should not produce a fragment.
    #[must_use]
    pub fn is_absent(self, value: &crate::Value) -> bool {
        match self {
            AbsencePolicy::Falsy => value.is_falsy(),
            AbsencePolicy::Missing => value.is_blank(),
        }
    }
}

/// Handling of row lists whose rows do not share the same keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Use every key seen, in first-appearance order, and leave missing cells empty.
    #[default]
    Lenient,
    /// Fail with [`Error::MalformedRow`](crate::Error::MalformedRow) when a row's
    /// keys differ from the first row's.
    Strict,
}

/// Configuration options for report rendering.
///
/// # Examples
///
/// ```rust
/// use content_report::RenderOptions;
///
/// let options = RenderOptions::new().with_numeric_alignment(false);
/// assert!(!options.numeric_alignment);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub absence_policy: AbsencePolicy,
    pub row_policy: RowPolicy,
    /// Right-align numeric table columns on their decimal point.
    pub numeric_alignment: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            absence_policy: AbsencePolicy::default(),
            row_policy: RowPolicy::default(),
            numeric_alignment: true,
        }
    }
}

impl RenderOptions {
    /// Creates default options (falsy skip, lenient rows, numeric alignment on).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use content_report::{AbsencePolicy, RenderOptions, RowPolicy};
    ///
    /// let options = RenderOptions::new();
    /// assert_eq!(options.absence_policy, AbsencePolicy::Falsy);
    /// assert_eq!(options.row_policy, RowPolicy::Lenient);
    /// assert!(options.numeric_alignment);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_absence_policy(mut self, policy: AbsencePolicy) -> Self {
        self.absence_policy = policy;
        self
    }

    #[must_use]
    pub fn with_row_policy(mut self, policy: RowPolicy) -> Self {
        self.row_policy = policy;
        self
    }

    /// Sets whether numeric table columns are right-aligned.
    ///
    /// When disabled every column is left-aligned.
    #[must_use]
    pub fn with_numeric_alignment(mut self, enabled: bool) -> Self {
        self.numeric_alignment = enabled;
        self
    }
}
