use crate::common::runner::{spawn_error, success};
use crate::common::session::{Session, session};
use pretty_assertions::assert_eq;
use rstest::rstest;
use svn_scm::artifacts::probe::version::Version;

#[rstest]
#[tokio::test]
async fn version_is_read_from_banner(session: Session) {
    session.runner.respond(
        "--version",
        success("svn, version 1.9.7 (r1800392)\n   compiled Aug 10 2017, 17:59:15 on x86_64-pc-linux-gnu\n"),
    );

    let version = session.repository.svn().version().await;

    assert_eq!(version, Some(Version::new(1, 9, 7)));
    assert_eq!(session.runner.invocations()[0].args, vec!["--version".to_string()]);
}

#[rstest]
#[tokio::test]
async fn version_is_printed(session: Session) {
    session
        .runner
        .respond("--version", success("svn, version 1.14.2 (r1899510)\n"));

    session.repository.version().await.unwrap();

    assert_eq!(session.output.contents(), "svn 1.14.2\n");
}

#[rstest]
#[tokio::test]
async fn missing_client_has_unknown_version(session: Session) {
    session
        .runner
        .respond("--version", spawn_error("No such file or directory (os error 2)"));

    assert_eq!(session.repository.svn().version().await, None);
}

#[rstest]
#[tokio::test]
async fn unexpected_banner_has_unknown_version(session: Session) {
    session.runner.respond("--version", success("svn, version 1.x\n"));

    session.repository.version().await.unwrap();

    assert_eq!(session.output.contents(), "unknown\n");
}
