mod common;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use common::{make_token, memory_session, now_secs, valid_token};
use lungai_predict::error::ClientError;
use lungai_predict::session::{FileTokenStore, Session, TokenStore, decode_claims};
use tempfile::TempDir;

#[test]
fn missing_token_is_invalid() {
    let mut session = memory_session(None);
    assert!(!session.is_valid());
    assert!(matches!(
        session.current().unwrap_err(),
        ClientError::AuthInvalid(_)
    ));
}

#[test]
fn live_token_is_valid_and_kept() {
    let token = valid_token();
    let mut session = memory_session(Some(&token));
    assert!(session.is_valid());
    assert_eq!(session.read().as_deref(), Some(token.as_str()));
    let info = session.user_info().unwrap();
    assert_eq!(info.id, "42");
    assert_eq!(info.name, "Dr. Test");
}

#[test]
fn expired_token_is_cleared() {
    let token = make_token(now_secs() - 10);
    let mut session = memory_session(Some(&token));
    assert!(!session.is_valid());
    assert!(session.read().is_none());
}

#[test]
fn expiry_uses_strict_comparison() {
    let token = make_token(1_000);
    let mut session = memory_session(Some(&token));
    assert!(session.is_valid_at(1_000.0));
    assert!(!session.is_valid_at(1_000.5));
    assert!(session.read().is_none());
}

#[test]
fn undecodable_token_is_cleared() {
    let mut session = memory_session(Some("definitely-not-a-jwt"));
    assert!(!session.is_valid());
    assert!(session.read().is_none());
}

#[test]
fn begin_refuses_unreadable_token() {
    let mut session = memory_session(None);
    assert!(session.begin("garbage").is_err());
    assert!(session.read().is_none());
}

#[test]
fn file_store_lifecycle() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("nested").join("auth_token");
    let token = valid_token();

    let mut session = Session::new(Box::new(FileTokenStore::new(path.clone())));
    session.begin(&token).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), token);

    let reopened = FileTokenStore::new(path.clone());
    assert_eq!(reopened.read().as_deref(), Some(token.as_str()));

    session.end().unwrap();
    assert!(!path.exists());
    session.end().unwrap();
}

#[test]
fn expired_file_token_is_removed() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("auth_token");
    std::fs::write(&path, make_token(now_secs() - 60)).unwrap();

    let mut session = Session::new(Box::new(FileTokenStore::new(path.clone())));
    assert!(!session.is_valid());
    assert!(!path.exists());
}

fn token_with(payload: &str) -> String {
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#),
        URL_SAFE_NO_PAD.encode(payload.as_bytes())
    )
}

#[test]
fn decodes_service_claims() {
    let token = token_with(
        r#"{"sub":"7","name":"Ada Lovelace","email":"ada@example.org","exp":1700000000}"#,
    );
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.sub, "7");
    assert_eq!(claims.user_info().name, "Ada Lovelace");
    assert!(claims.is_expired_at(1700000000.5));
    assert!(!claims.is_expired_at(1700000000.0));
}

#[test]
fn garbage_tokens_do_not_decode() {
    assert!(decode_claims("not-a-jwt").is_err());
    assert!(decode_claims("a.!!!.c").is_err());
    assert!(decode_claims(&token_with("[1,2,3]")).is_err());
}
