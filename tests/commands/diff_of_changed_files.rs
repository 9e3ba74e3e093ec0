use crate::common::runner::success;
use crate::common::session::{Session, session};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::PathBuf;
use svn_scm::artifacts::diff::{ResourceUri, Scheme};

#[rstest]
#[tokio::test]
async fn modified_file_is_diffed_against_last_synced_revision(session: Session) {
    session.runner.respond("status", success("M       src/a.ts\n"));
    session.repository.model().recompute().await;

    let request = session
        .repository
        .diff(Some(PathBuf::from("src/a.ts")))
        .await
        .unwrap()
        .unwrap();

    let path = session.path("src/a.ts");
    assert_eq!(request.original, ResourceUri::file(path.clone()).with_scheme(Scheme::Svn));
    assert_eq!(request.modified, ResourceUri::file(path));
    assert_eq!(request.title, "Diff - a.ts");
    assert!(request.preview);
}

#[rstest]
#[tokio::test]
async fn deleted_file_is_diffed_against_nothing(session: Session) {
    session.runner.respond("status", success("D       src/c.ts\n"));
    session.repository.model().recompute().await;

    let request = session
        .repository
        .diff(Some(PathBuf::from("src/c.ts")))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(request.modified.scheme, Scheme::Nothing);
    assert_eq!(request.original.scheme, Scheme::Svn);
    assert_eq!(
        session.repository.content(&request.modified).await.unwrap(),
        ""
    );
}

#[rstest]
#[tokio::test]
async fn staged_file_keeps_its_resource_command(session: Session) {
    session.runner.respond("status", success("D       src/c.ts\n"));
    session.repository.model().recompute().await;
    session.repository.stage(&["src/c.ts"]).await;

    let resource = session
        .repository
        .model()
        .resource("src/c.ts")
        .await
        .unwrap();
    let command = resource.command();

    assert_eq!(command.id.as_str(), "svn.diff");
    assert_eq!(command.target, session.path("src/c.ts"));
    assert!(resource.decorations(session.repository.icons()).strike_through);
}
