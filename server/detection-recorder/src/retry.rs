//! Bounded retry with a fixed delay between attempts.

use std::future::Future;
use std::time::Duration;

/// Run `op` up to `max_attempts` times, sleeping `delay` between attempts.
///
/// Always makes at least one attempt. Returns the first success, or the last
/// error once the budget is exhausted. Failed attempts are reported on
/// stderr. Knows nothing about any particular store client; the caller maps
/// exhaustion to its own error type.
pub async fn with_retries<T, E, F, Fut>(
  max_attempts: u32,
  delay: Duration,
  mut op: F,
) -> Result<T, E>
where
  E: std::fmt::Display,
  F: FnMut() -> Fut,
  Fut: Future<Output = Result<T, E>>,
{
  let mut attempt = 1u32;
  loop {
    match op().await {
      Ok(value) => return Ok(value),
      Err(e) if attempt < max_attempts => {
        eprintln!(
          "detection-recorder: attempt {}/{} failed: {}; retrying in {:?}",
          attempt, max_attempts, e, delay
        );
        tokio::time::sleep(delay).await;
        attempt += 1;
      }
      Err(e) => return Err(e),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::cell::Cell;

  #[tokio::test]
  async fn first_success_makes_exactly_one_attempt() {
    let calls = Cell::new(0u32);
    let result: Result<u32, String> = with_retries(5, Duration::ZERO, || {
      calls.set(calls.get() + 1);
      async { Ok(7) }
    })
    .await;
    assert_eq!(result.unwrap(), 7);
    assert_eq!(calls.get(), 1);
  }

  #[tokio::test]
  async fn succeeds_after_transient_failures() {
    let calls = Cell::new(0u32);
    let result: Result<u32, String> = with_retries(5, Duration::ZERO, || {
      let n = calls.get() + 1;
      calls.set(n);
      async move {
        if n < 3 {
          Err(format!("transient failure {}", n))
        } else {
          Ok(n)
        }
      }
    })
    .await;
    assert_eq!(result.unwrap(), 3);
    assert_eq!(calls.get(), 3);
  }

  #[tokio::test]
  async fn exhaustion_returns_the_last_error() {
    let calls = Cell::new(0u32);
    let result: Result<u32, String> = with_retries(3, Duration::ZERO, || {
      calls.set(calls.get() + 1);
      async { Err("still down".to_string()) }
    })
    .await;
    assert_eq!(result.unwrap_err(), "still down");
    assert_eq!(calls.get(), 3);
  }
}
