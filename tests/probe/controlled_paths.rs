use crate::common::runner::{spawn_error, success, tool_error};
use crate::common::session::{Session, session};
use rstest::rstest;
use svn_scm::areas::process::ExecResult;
use svn_scm::artifacts::diff::{ResourceUri, Scheme, original_resource};

#[rstest]
#[case::unchanged(success(""), true)]
#[case::modified(success("M       src/a.ts\n"), true)]
#[case::added(success("A       src/a.ts\n"), true)]
#[case::untracked(success("?       src/a.ts\n"), false)]
#[case::ignored(success("I       src/a.ts\n"), false)]
#[case::tool_error(tool_error("svn: warning: W155010: not found\n"), false)]
#[case::spawn_error(spawn_error("No such file or directory (os error 2)"), false)]
#[tokio::test]
async fn controlled_paths(session: Session, #[case] result: ExecResult, #[case] expected: bool) {
    session.runner.respond("status", result);
    let path = session.path("src/a.ts");

    assert_eq!(session.repository.svn().is_controlled(&path).await, expected);
    assert_eq!(
        session.runner.invocations()[0].args,
        vec!["status".to_string(), path.to_string_lossy().into_owned()]
    );
}

#[rstest]
#[tokio::test]
async fn controlled_file_has_an_original(session: Session) {
    session.runner.respond("status", success("M       src/a.ts\n"));
    let uri = ResourceUri::file(session.path("src/a.ts"));

    let original = original_resource(session.repository.svn(), &uri).await;

    assert_eq!(original, Some(uri.with_scheme(Scheme::Svn)));
}

#[rstest]
#[tokio::test]
async fn only_file_uris_have_an_original(session: Session) {
    let uri = ResourceUri::file(session.path("src/a.ts")).with_scheme(Scheme::Svn);

    assert_eq!(original_resource(session.repository.svn(), &uri).await, None);
    assert!(session.runner.invocations().is_empty());
}
