//! Bridges from a single future into an `Outcome`.
//!
//! - `from_future` awaits a fallible future and maps its `Ok`/`Err` onto the
//!   matching variant.
//! - `catch_future` awaits an infallible future and absorbs a panic during
//!   its evaluation into `Err(OutcomeError::Panicked)`.
//!
//! Neither bridge adds cancellation or a timeout. They complete when the
//! wrapped future completes; wrap the source in a timeout first if needed.
use std::any::Any;
use std::future::Future;
use std::panic::UnwindSafe;

use futures::FutureExt;
use log::debug;

use crate::error::OutcomeError;
use crate::outcome::Outcome;

/// Awaits `future` and converts its result into an `Outcome`.
///
/// Resolution with `Ok(value)` yields `Outcome::Ok(value)`; resolution with
/// `Err(error)` yields `Outcome::Err(error)`. The bridge itself never fails.
pub async fn from_future<F, T, E>(future: F) -> Outcome<T, E>
where
    F: Future<Output = Result<T, E>>,
{
    future.await.into()
}

/// Awaits `future`, turning a panic raised while polling it into an error.
///
/// Wrap the future in `std::panic::AssertUnwindSafe` if it captures state
/// that is not `UnwindSafe`.
pub async fn catch_future<F>(future: F) -> Outcome<F::Output, OutcomeError>
where
    F: Future + UnwindSafe,
{
    match future.catch_unwind().await {
        Ok(value) => Outcome::Ok(value),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            debug!("Bridged future panicked: {}", message);
            Outcome::Err(OutcomeError::Panicked(message))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        String::from("non-string panic payload")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future;
    use std::io;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn fulfilled_future_becomes_ok() {
        let outcome = block_on(from_future(future::ready(Ok::<i32, io::Error>(10))));
        assert!(outcome.is_ok());
        assert_eq!(outcome.unwrap().unwrap(), 10);
    }

    #[test]
    fn rejected_future_becomes_err() {
        let outcome = block_on(from_future(future::ready(Err::<i32, _>(io::Error::other(
            "rejected!",
        )))));
        assert!(outcome.is_err());
        assert_eq!(outcome.unwrap_err().unwrap().to_string(), "rejected!");
    }

    #[test]
    fn waits_for_a_pending_future() {
        let (tx, rx) = oneshot::channel::<&'static str>();
        let sender = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            let _ = tx.send("late");
        });
        let outcome = block_on(from_future(rx));
        sender.join().unwrap();
        assert_eq!(outcome.ok_value(), Some("late"));
    }

    #[test]
    fn dropped_sender_is_a_rejection() {
        let (tx, rx) = oneshot::channel::<u8>();
        drop(tx);
        let outcome = block_on(from_future(rx));
        assert_eq!(outcome, Outcome::Err(oneshot::Canceled));
    }

    #[test]
    fn panicking_future_is_absorbed() {
        let outcome = block_on(catch_future(async {
            if true {
                panic!("boom");
            }
            10
        }));
        match outcome {
            Outcome::Err(OutcomeError::Panicked(message)) => assert_eq!(message, "boom"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn formatted_panic_message_is_kept() {
        let code = 7;
        let outcome = block_on(catch_future(async move {
            if code > 0 {
                panic!("exit code {}", code);
            }
        }));
        assert_eq!(
            outcome.unwrap_err().unwrap().to_string(),
            "Future panicked: exit code 7"
        );
    }

    #[test]
    fn completed_future_passes_through() {
        let outcome = block_on(catch_future(future::ready("fine")));
        assert_eq!(outcome.ok_value(), Some("fine"));
    }
}
