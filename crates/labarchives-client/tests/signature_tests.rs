/*
[INPUT]:  Fixed clocks and known credentials
[OUTPUT]: Test results for call signing
[POS]:    Integration tests - authentication
[UPDATE]: When signing algorithm or encoding changes
*/

mod common;

use common::TEST_EXPIRES;
use labarchives_client::{CallSigner, Clock, Credential, FixedClock, LabArchivesError, SystemClock};
use rstest::rstest;
use tokio_test::assert_ok;

fn credential() -> Credential {
    Credential::new("AKID123", "test-secret", "https://api.example.com", "/api")
}

#[test]
fn test_golden_signature() {
    let credential = credential();
    let signature = assert_ok!(CallSigner::new(&credential).sign_now("user_access_info", &FixedClock(TEST_EXPIRES)));

    assert_eq!(signature.expires, TEST_EXPIRES);
    assert_eq!(signature.signature, "Y65M34hWOp22qjLH1R8XFW5vzo4%3D");
}

#[rstest]
#[case("institutional_login_urls")]
#[case("user_access_info")]
#[case("get_tree_level")]
#[case("add_entry")]
fn test_advancing_clock_changes_signature(#[case] method: &str) {
    let credential = credential();
    let signer = CallSigner::new(&credential);

    let first = assert_ok!(signer.sign_now(method, &FixedClock(TEST_EXPIRES)));
    let second = assert_ok!(signer.sign_now(method, &FixedClock(TEST_EXPIRES + 1)));

    assert_ne!(first.signature, second.signature);
    assert_eq!(second.expires, first.expires + 1);
}

#[test]
fn test_signature_is_url_safe() {
    let credential = credential();
    let signer = CallSigner::new(&credential);

    for offset in 0..64 {
        let signature = assert_ok!(signer.sign("notebook_info", TEST_EXPIRES + offset));
        assert!(
            !signature.signature.contains(['+', '/', '=']),
            "unescaped signature: {}",
            signature.signature
        );
        assert_eq!(signature.raw_signature().len(), 28);
    }
}

#[test]
fn test_system_clock_signature_uses_current_time() {
    let credential = credential();
    let before = SystemClock.now_millis();
    let signature = assert_ok!(CallSigner::new(&credential).sign_now("notebook_info", &SystemClock));
    let after = SystemClock.now_millis();

    assert!(signature.expires >= before && signature.expires <= after);
}

#[test]
fn test_missing_secret_fails_synchronously() {
    let credential = Credential::new("AKID123", "", "https://api.example.com", "/api");
    let err = CallSigner::new(&credential)
        .sign("notebook_info", TEST_EXPIRES)
        .unwrap_err();
    assert!(matches!(err, LabArchivesError::Signature(_)));
}
