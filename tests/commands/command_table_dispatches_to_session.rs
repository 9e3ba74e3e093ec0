use crate::common::STATUS_A;
use crate::common::runner::success;
use crate::common::session::{Session, session};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;
use svn_scm::areas::model::RecomputeOutcome;
use svn_scm::commands::registry::{CommandOutcome, CommandTable};

#[rstest]
#[tokio::test]
async fn refresh_stage_and_unstage_through_the_table(session: Session) {
    session.runner.respond("status", success(STATUS_A));
    let table = CommandTable::standard().unwrap();
    let repository = &session.repository;

    let refreshed = table.invoke("svn.refresh", repository, vec![]).await.unwrap();
    let staged = table
        .invoke("svn.stage", repository, vec![PathBuf::from("src/b.ts")])
        .await
        .unwrap();
    let unstaged = table
        .invoke("svn.unstage", repository, vec![PathBuf::from("src/b.ts")])
        .await
        .unwrap();

    assert_eq!(
        refreshed,
        CommandOutcome::Recomputed(RecomputeOutcome::Applied {
            generation: 1,
            entries: 2
        })
    );
    assert_eq!(staged, CommandOutcome::Moved(1));
    assert_eq!(unstaged, CommandOutcome::Moved(1));
    assert!(repository.model().staging_tree().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn unknown_command_is_an_error(session: Session) {
    let table = CommandTable::standard().unwrap();

    let error = table
        .invoke("svn.commit", &session.repository, vec![])
        .await
        .unwrap_err();

    assert!(error.to_string().contains("unknown command: svn.commit"));
    assert!(session.runner.invocations().is_empty());
}

#[rstest]
#[tokio::test]
async fn diff_without_target_does_nothing(session: Session) {
    let table = CommandTable::standard().unwrap();

    let outcome = table
        .invoke("svn.diff", &session.repository, vec![])
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Diff(None));
}
