use crate::common::STATUS_A;
use crate::common::runner::success;
use crate::common::session::{Session, session};
use pretty_assertions::assert_eq;
use rstest::rstest;
use svn_scm::areas::model::RecomputeOutcome;
use svn_scm::artifacts::events::TreeKind;
use svn_scm::artifacts::status::status_kind::StatusKind;

#[rstest]
#[tokio::test]
async fn recompute_lists_working_tree(session: Session) {
    session.runner.respond("status", success(STATUS_A));
    let events = session.record_events();

    let outcome = session.repository.model().recompute().await;

    assert_eq!(
        outcome,
        RecomputeOutcome::Applied {
            generation: 1,
            entries: 2
        }
    );
    assert_eq!(
        session.repository.model().working_tree().await.to_vec(),
        vec![
            session.resource("src/a.ts", StatusKind::Modified),
            session.resource("src/b.ts", StatusKind::Untracked),
        ]
    );
    assert!(session.repository.model().staging_tree().await.is_empty());
    assert_eq!(
        *events.lock().unwrap(),
        vec![(
            TreeKind::Working,
            vec![session.path("src/a.ts"), session.path("src/b.ts")]
        )]
    );
}

#[rstest]
#[tokio::test]
async fn status_runs_in_root_with_pinned_locale(session: Session) {
    session.runner.respond("status", success(""));

    session.repository.model().recompute().await;

    let invocations = session.runner.invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(invocations[0].program, "svn");
    assert_eq!(invocations[0].args, vec!["status".to_string()]);
    assert_eq!(
        invocations[0].cwd.as_deref(),
        Some(session.repository.path())
    );
    assert!(
        invocations[0]
            .env
            .contains(&("LC_ALL".to_string(), "en_US.UTF-8".to_string()))
    );
    assert!(
        invocations[0]
            .env
            .contains(&("LANG".to_string(), "en_US.UTF-8".to_string()))
    );
}

#[rstest]
#[tokio::test]
async fn unrecognised_lines_are_skipped(session: Session) {
    session.runner.respond(
        "status",
        success("Performing status on external item at 'lib'\n\nM       src/a.ts\nX       lib\n"),
    );

    session.repository.model().recompute().await;

    assert_eq!(
        session.repository.model().working_tree().await.to_vec(),
        vec![session.resource("src/a.ts", StatusKind::Modified)]
    );
}
