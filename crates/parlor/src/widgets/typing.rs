//! Typing speed and accuracy test.

use chrono::{DateTime, TimeDelta, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Default time allowed for one test.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 60;

/// Longest time limit accepted: one day.
pub const MAX_TIME_LIMIT_SECS: u64 = 24 * 60 * 60;

/// Text offered when no sample texts are configured.
pub const DEFAULT_SAMPLE_TEXT: &str = "Streamlit is an open-source app framework for Machine Learning and Data Science teams. \
It is incredibly easy to build beautiful, custom web apps using Streamlit. \
Streamlit is the fastest way to build and share data apps. \
With Streamlit, you can turn data scripts into shareable web apps in minutes. \
Streamlit apps are Python scripts that run as web applications.";

/// Typing test failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TypingError {
    /// The end time is not after the start time.
    #[display("The test has not run for any time yet.")]
    EmptyInterval,

    /// The reference text has no words.
    #[display("The sample text has no words.")]
    EmptyOriginal,
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Words typed per minute between `start` and `end`.
///
/// # Errors
///
/// Returns [`TypingError::EmptyInterval`] when `end <= start`.
pub fn words_per_minute(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    typed: &str,
) -> Result<f64, TypingError> {
    let elapsed = end - start;
    if elapsed <= TimeDelta::zero() {
        return Err(TypingError::EmptyInterval);
    }
    let minutes = elapsed.as_seconds_f64() / 60.0;
    Ok(word_count(typed) as f64 / minutes)
}

/// Percentage of original words matched at the same position in `typed`.
///
/// Extra typed words are ignored; missing words count as wrong.
///
/// # Errors
///
/// Returns [`TypingError::EmptyOriginal`] when `original` has no words.
pub fn accuracy(original: &str, typed: &str) -> Result<f64, TypingError> {
    let total = word_count(original);
    if total == 0 {
        return Err(TypingError::EmptyOriginal);
    }
    let correct = original
        .split_whitespace()
        .zip(typed.split_whitespace())
        .filter(|(o, t)| o == t)
        .count();
    Ok(correct as f64 / total as f64 * 100.0)
}

/// Result of a finished test.
#[derive(Debug, Clone, Copy, PartialEq, Getters, Serialize, Deserialize)]
pub struct TypingReport {
    words_per_minute: f64,
    accuracy: f64,
    timed_out: bool,
}

impl std::fmt::Display for TypingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.timed_out {
            writeln!(f, "Time is up!")?;
        }
        writeln!(
            f,
            "Your typing speed: {:.2} words per minute",
            self.words_per_minute
        )?;
        write!(f, "Your typing accuracy: {:.2}%", self.accuracy)
    }
}

/// A running test: the text to copy and when the clock started.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TypingTest {
    text: String,
    started: DateTime<Utc>,
    time_limit: TimeDelta,
}

impl TypingTest {
    /// Starts the clock at `started`.
    ///
    /// Limits are clamped to `1..=MAX_TIME_LIMIT_SECS`.
    #[instrument(skip(text), fields(words = word_count(&text)))]
    pub fn start(text: String, started: DateTime<Utc>, time_limit_secs: u64) -> Self {
        let secs = time_limit_secs.clamp(1, MAX_TIME_LIMIT_SECS);
        let time_limit = i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::seconds(DEFAULT_TIME_LIMIT_SECS as i64));
        info!("Typing test started");
        Self {
            text,
            started,
            time_limit,
        }
    }

    /// Time left at `now`, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> TimeDelta {
        let left = self.time_limit - (now - self.started);
        left.max(TimeDelta::zero())
    }

    /// Whether the time limit has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.remaining(now) == TimeDelta::zero()
    }

    /// Scores `typed` against the sample text.
    ///
    /// # Errors
    ///
    /// Fails when no time has passed or the sample text is empty.
    #[instrument(skip(self, typed))]
    pub fn finish(&self, now: DateTime<Utc>, typed: &str) -> Result<TypingReport, TypingError> {
        let report = TypingReport {
            words_per_minute: words_per_minute(self.started, now, typed)?,
            accuracy: accuracy(&self.text, typed)?,
            timed_out: self.is_expired(now),
        };
        info!(
            wpm = report.words_per_minute,
            accuracy = report.accuracy,
            "Typing test finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0)
            .single()
            .expect("valid timestamp")
    }

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        assert_eq!(word_count("  the quick\n brown   fox "), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_wpm_over_thirty_seconds() {
        let wpm = words_per_minute(t(0), t(30), "one two three four five").expect("positive");
        assert!((wpm - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_wpm_needs_positive_interval() {
        assert_eq!(
            words_per_minute(t(5), t(5), "word"),
            Err(TypingError::EmptyInterval)
        );
    }

    #[test]
    fn test_wpm_sub_millisecond_interval_is_finite() {
        let wpm = words_per_minute(t(0), t(0) + TimeDelta::microseconds(500), "a b c")
            .expect("positive");
        assert!(wpm.is_finite());
        assert!((wpm - 360_000.0).abs() < 1e-3);
    }

    #[test]
    fn test_accuracy_is_position_wise() {
        let acc = accuracy("a b c d", "a x c").expect("has words");
        assert!((acc - 50.0).abs() < 1e-9);
        let acc = accuracy("a b", "a b extra words").expect("has words");
        assert!((acc - 100.0).abs() < 1e-9);
        assert_eq!(accuracy("   ", "a"), Err(TypingError::EmptyOriginal));
    }

    #[test]
    fn test_remaining_counts_down_to_zero() {
        let test = TypingTest::start("a b".to_string(), t(0), 60);
        assert_eq!(test.remaining(t(15)), TimeDelta::seconds(45));
        assert_eq!(test.remaining(t(90)), TimeDelta::zero());
        assert!(test.is_expired(t(60)));
        assert!(!test.is_expired(t(59)));
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        let test = TypingTest::start("a b".to_string(), t(0), u64::MAX);
        assert_eq!(*test.time_limit(), TimeDelta::seconds(MAX_TIME_LIMIT_SECS as i64));
        assert!(!test.is_expired(t(0)));
    }

    #[test]
    fn test_finish_reports_timeout() {
        let test = TypingTest::start("hello world".to_string(), t(0), 60);
        let report = test.finish(t(60), "hello world").expect("valid");
        assert!(*report.timed_out());
        assert!((report.words_per_minute() - 2.0).abs() < 1e-9);
        assert!(report.to_string().starts_with("Time is up!"));
        assert!(report.to_string().ends_with("Your typing accuracy: 100.00%"));
    }

    #[test]
    fn test_default_sample_has_words() {
        assert!(word_count(DEFAULT_SAMPLE_TEXT) > 40);
    }
}
