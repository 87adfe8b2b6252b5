//! Suggested meeting times
//!
//! [`CannedSuggestions`] is a placeholder: it waits a fixed delay and
//! returns the same four times regardless of input, without looking
//! at anyone's calendar. It sits behind the same trait a real
//! availability integration would implement, so swapping one in
//! requires no caller changes.

use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait SuggestTimes: Send + Sync {
    async fn suggest(
        &self,
        date: NaiveDate,
        duration_minutes: i64,
        participants: &[String],
    ) -> Result<Vec<String>, anyhow::Error>;
}

pub struct CannedSuggestions {
    delay: Duration,
}

impl CannedSuggestions {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CannedSuggestions {
    fn default() -> Self {
        // Simulates a round trip so the UI's loading state is visible
        Self::new(Duration::from_millis(800))
    }
}

#[async_trait]
impl SuggestTimes for CannedSuggestions {
    async fn suggest(
        &self,
        _date: NaiveDate,
        _duration_minutes: i64,
        _participants: &[String],
    ) -> Result<Vec<String>, anyhow::Error> {
        tokio::time::sleep(self.delay).await;
        Ok(vec![
            "09:00".to_string(),
            "10:30".to_string(),
            "14:00".to_string(),
            "15:30".to_string(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn it_returns_the_same_times_regardless_of_input() {
        let stub = CannedSuggestions::new(Duration::ZERO);
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let a = stub.suggest(date, 30, &["a@x.com".to_string()]).await.unwrap();
        let b = stub.suggest(date, 120, &[]).await.unwrap();

        assert_eq!(a, vec!["09:00", "10:30", "14:00", "15:30"]);
        assert_eq!(a, b);
    }
}
