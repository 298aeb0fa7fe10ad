//! Search timing metrics.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::{LogBuilder, RequestId, StructuredLogger};

/// Outcome and timing of one search invocation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchMetrics {
    pub request_id: String,
    /// Operation name (e.g., "search", "browse", "related").
    pub operation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Products considered.
    pub candidates: u64,
    /// Products returned before pagination.
    pub results: u64,
    /// Results carrying the lowest-price badge.
    pub low_price_count: u64,
    pub duration_us: u64,
}

impl SearchMetrics {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Attach these metrics as fields on a log entry.
    pub fn annotate<'a>(&self, builder: LogBuilder<'a>) -> LogBuilder<'a> {
        builder
            .field_opt("query", self.query.as_deref())
            .field_opt("category", self.category.as_deref())
            .field_u64("candidates", self.candidates)
            .field_u64("results", self.results)
            .field_u64("low_price_count", self.low_price_count)
            .duration_ms("duration_ms", Duration::from_micros(self.duration_us))
    }

    /// Log these metrics at info level.
    pub fn log(&self, logger: &StructuredLogger) {
        self.annotate(logger.info_builder(format!("{} complete", self.operation)))
            .emit();
    }
}

/// Collector started before a search and finished with its outcome.
#[derive(Debug)]
pub struct SearchTimer {
    request_id: RequestId,
    operation: String,
    query: Option<String>,
    category: Option<String>,
    start: Instant,
}

impl SearchTimer {
    pub fn start(request_id: RequestId, operation: impl Into<String>) -> Self {
        Self {
            request_id,
            operation: operation.into(),
            query: None,
            category: None,
            start: Instant::now(),
        }
    }

    pub fn with_query(mut self, query: Option<&str>) -> Self {
        self.query = query.map(str::to_string);
        self
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = category.map(str::to_string);
        self
    }

    /// Stop the clock and record the outcome.
    pub fn finish(
        self,
        candidates: usize,
        results: usize,
        low_price_count: usize,
    ) -> SearchMetrics {
        SearchMetrics {
            request_id: self.request_id.to_string(),
            operation: self.operation,
            query: self.query,
            category: self.category,
            candidates: candidates as u64,
            results: results as u64,
            low_price_count: low_price_count as u64,
            duration_us: self.start.elapsed().as_micros() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_records_outcome() {
        let metrics = SearchTimer::start(RequestId::from_string("r1"), "search")
            .with_query(Some("apple"))
            .with_category(None)
            .finish(10, 2, 1);

        assert_eq!(metrics.request_id, "r1");
        assert_eq!(metrics.query.as_deref(), Some("apple"));
        assert_eq!(metrics.candidates, 10);
        assert_eq!(metrics.results, 2);
        assert_eq!(metrics.low_price_count, 1);

        let json: serde_json::Value = serde_json::from_str(&metrics.to_json().unwrap()).unwrap();
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_annotate_adds_fields() {
        let logger = StructuredLogger::new(RequestId::from_string("r2"));
        let metrics = SearchTimer::start(logger.request_id().clone(), "browse").finish(3, 3, 0);
        let entry = metrics
            .annotate(logger.info_builder("browse complete"))
            .build()
            .unwrap();

        assert_eq!(entry.fields["results"], serde_json::json!(3));
        assert_eq!(entry.fields["low_price_count"], serde_json::json!(0));
        assert!(entry.fields.contains_key("duration_ms"));
    }
}
