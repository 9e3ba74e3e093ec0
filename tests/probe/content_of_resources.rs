use crate::common::runner::{success, tool_error};
use crate::common::session::{Session, session};
use assert_fs::prelude::{FileWriteStr, PathChild};
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::path::Path;
use svn_scm::artifacts::diff::{ResourceUri, Scheme};

#[rstest]
#[tokio::test]
async fn svn_content_is_last_synced_revision(session: Session) {
    session.runner.respond("cat", success("export const a = 1;\n"));
    let uri = ResourceUri::file(session.path("src/a.ts")).with_scheme(Scheme::Svn);

    let content = session.repository.content(&uri).await.unwrap();

    assert_eq!(content, "export const a = 1;\n");
    assert_eq!(
        session.runner.invocations()[0].args,
        vec![
            "cat".to_string(),
            session.path("src/a.ts").to_string_lossy().into_owned()
        ]
    );
}

#[rstest]
#[tokio::test]
async fn failed_cat_is_an_error(session: Session) {
    session.runner.respond(
        "cat",
        tool_error("svn: E200009: Could not cat all targets because some targets are not versioned\n"),
    );
    let uri = ResourceUri::file(session.path("new.ts")).with_scheme(Scheme::Svn);

    let error = session.repository.content(&uri).await.unwrap_err();

    assert!(error.to_string().contains("E200009"));
}

#[rstest]
#[tokio::test]
async fn cat_prints_content(session: Session) {
    session.runner.respond("cat", success("one\ntwo\n"));

    session.repository.cat(Path::new("src/a.ts")).await.unwrap();

    assert_eq!(session.output.contents(), "one\ntwo\n");
}

#[rstest]
#[tokio::test]
async fn file_content_is_read_from_disk(session: Session) {
    session.dir.child("notes.txt").write_str("local edits").unwrap();
    let uri = ResourceUri::file(session.path("notes.txt"));

    assert_eq!(session.repository.content(&uri).await.unwrap(), "local edits");
    assert!(session.runner.invocations().is_empty());
}
