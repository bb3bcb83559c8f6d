//! Retry policies for catalog lookups.

use std::time::Duration;

use turbo_cart::CatalogError;

/// Backoff strategy between retry attempts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackoffStrategy {
    /// No delay between retries.
    None,
    /// Fixed delay between retries.
    Fixed(Duration),
    /// Exponential backoff with base and max.
    Exponential {
        /// Initial delay.
        base: Duration,
        /// Maximum delay.
        max: Duration,
    },
}

impl BackoffStrategy {
    /// Calculate delay for a given retry number (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        match self {
            Self::None => Duration::ZERO,
            Self::Fixed(d) => *d,
            Self::Exponential { base, max } => {
                let multiplier = 2u32.saturating_pow(attempt);
                std::cmp::min(base.saturating_mul(multiplier), *max)
            }
        }
    }
}

impl Default for BackoffStrategy {
    fn default() -> Self {
        Self::Exponential {
            base: Duration::from_millis(100),
            max: Duration::from_secs(1),
        }
    }
}

/// Which lookup failures are worth repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryCondition {
    /// Anything [`CatalogError::is_transient`] accepts.
    Transient,
    /// One specific HTTP status, e.g. 429 from a throttling proxy.
    StatusCode(u16),
    /// A request that ran out of time.
    Timeout,
}

impl RetryCondition {
    pub fn matches(&self, error: &CatalogError) -> bool {
        match (self, error) {
            (Self::Transient, e) => e.is_transient(),
            (Self::StatusCode(code), CatalogError::Http { status, .. }) => status == code,
            (Self::Timeout, CatalogError::Timeout(_)) => true,
            _ => false,
        }
    }
}

/// How often, and after which failures, a lookup is repeated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries allowed after the first request.
    pub max_attempts: u32,
    /// Pause before each retry.
    pub backoff: BackoffStrategy,
    /// A failure is retried if any condition matches it.
    pub retry_on: Vec<RetryCondition>,
}

impl RetryPolicy {
    /// Retry transient failures up to `max_attempts` times.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: BackoffStrategy::default(),
            retry_on: vec![RetryCondition::Transient],
        }
    }

    /// Fail on the first error.
    pub fn none() -> Self {
        Self {
            max_attempts: 0,
            backoff: BackoffStrategy::None,
            retry_on: Vec::new(),
        }
    }

    pub fn with_backoff(mut self, strategy: BackoffStrategy) -> Self {
        self.backoff = strategy;
        self
    }

    pub fn with_conditions(mut self, conditions: Vec<RetryCondition>) -> Self {
        self.retry_on = conditions;
        self
    }

    /// Whether the failure of a request should be repeated.
    ///
    /// `attempt` counts retries already made.
    pub fn should_retry(&self, error: &CatalogError, attempt: u32) -> bool {
        attempt < self.max_attempts && self.retry_on.iter().any(|c| c.matches(error))
    }

    /// Pause before the next request, or `None` once the lookup should give up.
    pub fn next_delay(&self, error: &CatalogError, attempt: u32) -> Option<Duration> {
        self.should_retry(error, attempt)
            .then(|| self.backoff.delay_for_attempt(attempt))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(1)
    }
}
