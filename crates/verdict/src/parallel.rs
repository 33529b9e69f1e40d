//! Settle-all aggregation of concurrently pending outcomes.
//!
//! "Parallel" here means concurrently pending on one task, not
//! multi-threaded: the only suspension point is the single join over the
//! whole input collection. Output order always equals input order, no
//! matter in which order the operations actually settle.

use std::future::Future;

use futures::future::join_all;
use itertools::Itertools;
use tap::Pipe;

use crate::outcome::{exception, success, IntoOutcome, Outcome};

/// Await every pending operation and merge the results into one outcome.
///
/// Never short-circuits: all operations settle, even after a failure. Each
/// settled value converts through [`IntoOutcome`], so an operation may
/// yield an `Outcome` directly, a `Result` (whose `Err` arm is the analog
/// of a rejected pending operation), or a `Result` already carrying an
/// outcome, which flattens instead of double-wrapping.
///
/// If no operation failed, the combined outcome is a success carrying every
/// success payload in input order. If any failed, it is an exception
/// carrying a positional collection of the same length as the input:
/// `Some(payload)` where that operation failed, `None` where it succeeded.
///
/// An empty input settles immediately as a success with an empty payload.
pub async fn process_in_parallel<S, E, O, F, I>(pending: I) -> Outcome<Vec<S>, Vec<Option<E>>>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = O>,
    O: IntoOutcome<S, E>,
{
    let settled = join_all(pending)
        .await
        .into_iter()
        .map(IntoOutcome::into_outcome)
        .collect_vec();

    if settled.iter().any(Outcome::is_exception) {
        settled
            .into_iter()
            .map(Outcome::exception_payload)
            .collect_vec()
            .pipe(exception)
    } else {
        settled
            .into_iter()
            .filter_map(Outcome::success_payload)
            .collect_vec()
            .pipe(success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn settle(outcome: Outcome<&str, String>) -> Outcome<&str, String> {
        outcome
    }

    #[tokio::test]
    async fn test_empty_input_settles_as_empty_success() {
        let merged =
            process_in_parallel(Vec::<std::future::Ready<Outcome<i32, String>>>::new()).await;
        assert!(merged.is_success());
        assert_eq!(merged.success_payload(), Some(vec![]));
    }

    #[tokio::test]
    async fn test_all_successes_merge_in_input_order() {
        let merged =
            process_in_parallel(vec![settle(success("a")), settle(success("b"))]).await;
        assert!(merged.is_success());
        assert_eq!(merged.success_payload(), Some(vec!["a", "b"]));
    }

    #[tokio::test]
    async fn test_single_failure_yields_sparse_positional_payload() {
        let merged = process_in_parallel(vec![
            settle(success("a")),
            settle(exception("boom".into())),
            settle(success("b")),
        ])
        .await;
        assert!(merged.is_exception());
        assert_eq!(
            merged.exception_payload(),
            Some(vec![None, Some("boom".to_string()), None])
        );
    }

    #[tokio::test]
    async fn test_all_failures_populate_every_position() {
        let merged = process_in_parallel(vec![
            settle(exception("first".into())),
            settle(exception("second".into())),
        ])
        .await;
        assert_eq!(
            merged.exception_payload(),
            Some(vec![Some("first".to_string()), Some("second".to_string())])
        );
    }

    #[tokio::test]
    async fn test_rejected_operations_wrap_as_exceptions() {
        let ops = [Ok::<i32, String>(1), Err::<i32, String>("rejected".into())]
            .into_iter()
            .map(|settled| async move { settled });
        let merged = process_in_parallel(ops).await;
        assert_eq!(
            merged.exception_payload(),
            Some(vec![None, Some("rejected".to_string())])
        );
    }
}
