use crate::common::runner::{success, tool_error};
use crate::common::session::{Session, session};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;
use svn_scm::commands::registry::{CommandOutcome, CommandTable};

#[rstest]
#[tokio::test]
async fn revert_forwards_absolute_paths(session: Session) {
    session.runner.respond("revert", success("Reverted 'src/a.ts'\n"));
    let table = CommandTable::standard().unwrap();

    let outcome = table
        .invoke(
            "svn.revert",
            &session.repository,
            vec![PathBuf::from("src/a.ts"), PathBuf::from("src/b.ts")],
        )
        .await
        .unwrap();

    assert_eq!(outcome, CommandOutcome::Done);
    assert_eq!(
        session.runner.invocations()[0].args,
        vec![
            "revert".to_string(),
            session.path("src/a.ts").to_string_lossy().into_owned(),
            session.path("src/b.ts").to_string_lossy().into_owned(),
        ]
    );
}

#[rstest]
#[tokio::test]
async fn revert_without_paths_passes_none(session: Session) {
    session.runner.respond("revert", success(""));

    session.repository.revert(&[]).await.unwrap();

    assert_eq!(
        session.runner.invocations()[0].args,
        vec!["revert".to_string()]
    );
}

#[rstest]
#[tokio::test]
async fn failed_revert_is_an_error(session: Session) {
    session
        .runner
        .respond("revert", tool_error("svn: E155010: The node was not found.\n"));

    let error = session
        .repository
        .revert(&[PathBuf::from("gone.ts")])
        .await
        .unwrap_err();

    assert!(error.to_string().contains("E155010"));
}
