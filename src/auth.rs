//! HTTP Basic Authentication against a fixed credential table.
//!
//! The device carries a small set of (username, password) pairs compiled in or built during
//! start up.  `BasicAuth` checks the `Authorization` header of a request against that table:
//! the header value must be `Basic <base64(username:password)>`, standard alphabet, standard
//! padding.
//!
//! Validation is a single pass that stops on the first failure.  The caller observes only a
//! pass/fail outcome; on failure `BasicAuth::validate` sends exactly one `401` carrying a
//! uniform `WWW-Authenticate: Basic realm=""` challenge, so the client cannot distinguish a
//! bad password from an unknown user or a garbled token.
//!
//! ```
//! use frontlite::auth::{BasicAuth, Credential, CredentialTable};
//!
//! let users = [Credential::new("admin", "88888888")];
//! let table = CredentialTable::new(&users);
//! let auth = BasicAuth::new(&table);
//!
//! // base64("admin:88888888")
//! assert!(auth.authenticate(Some("Basic YWRtaW46ODg4ODg4ODg=")).is_ok());
//! assert!(auth.authenticate(Some("Basic YWRtaW46d3Jvbmc=")).is_err());
//! ```

use base64ct::{Base64, Encoding};
use embedded_io_async::{Read, Write};

use crate::ascii::COLON;
use crate::header::ResponseHeader;
use crate::request::Request;
use crate::response::{Responder, ResponderError, StatusCode};

const BASIC_SCHEME: &str = "Basic ";
const CHALLENGE: &str = "Basic realm=\"\"";

// Decoded tokens live in a stack buffer scoped to the validation call.  Credentials are
// bounded well below this, anything longer is rejected at decode.
const DECODED_MAX: usize = 128;

/// A single username/password pair.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Credential<'a> {
    /// Account name, matched byte for byte
    pub username: &'a str,
    /// Password, matched byte for byte
    pub password: &'a str,
}

impl<'a> Credential<'a> {
    /// Construct a credential from a username and password.
    pub const fn new(username: &'a str, password: &'a str) -> Self {
        Self { username, password }
    }
}

/// The fixed set of valid credentials, built once at start up and shared by reference.
///
/// The table is never mutated after construction so it may be shared across concurrent
/// request dispatches without synchronisation.  Usernames must be unique within the table;
/// lookups scan in table order and stop at the first full match.
#[derive(Clone, Copy, Debug)]
pub struct CredentialTable<'a> {
    entries: &'a [Credential<'a>],
}

impl<'a> CredentialTable<'a> {
    /// Construct a table over the provided entries.  Usernames must be unique.
    pub const fn new(entries: &'a [Credential<'a>]) -> Self {
        Self { entries }
    }

    // Full length-for-length comparison on both fields.  A candidate that merely starts
    // with a stored value must not match.
    fn contains(&self, username: &[u8], password: &[u8]) -> bool {
        self.entries.iter().any(|entry| {
            entry.username.as_bytes() == username && entry.password.as_bytes() == password
        })
    }
}

/// The reason a token was rejected.  Never exposed to the client, which sees a uniform `401`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AuthError {
    /// The request carried no `Authorization` header
    MissingAuthHeader,
    /// The header value did not start with the `Basic ` scheme token
    MalformedScheme,
    /// The token was not valid standard Base64, or exceeded the decode buffer
    DecodeError,
    /// The decoded token contained no `:` separator
    MalformedToken,
    /// The username/password pair is not in the table
    InvalidCredentials,
}

/// Validates Basic-Auth tokens against a `CredentialTable`.
pub struct BasicAuth<'a> {
    table: &'a CredentialTable<'a>,
}

impl<'a> BasicAuth<'a> {
    /// Construct a validator over the provided credential table.
    pub fn new(table: &'a CredentialTable<'a>) -> Self {
        Self { table }
    }

    /// Check an `Authorization` header value against the table.  Pure with respect to the
    /// request and the table; no response is produced.
    pub fn authenticate(&self, authorization: Option<&str>) -> Result<(), AuthError> {
        let header = authorization.ok_or(AuthError::MissingAuthHeader)?;

        // strip_prefix also rejects values shorter than the scheme token
        let token = header
            .strip_prefix(BASIC_SCHEME)
            .ok_or(AuthError::MalformedScheme)?;

        let mut buf = [0u8; DECODED_MAX];
        let decoded = Base64::decode(token, &mut buf).map_err(|_| AuthError::DecodeError)?;

        let split = decoded
            .iter()
            .position(|b| *b == COLON)
            .ok_or(AuthError::MalformedToken)?;

        let username = &decoded[..split];
        let password = &decoded[split + 1..];

        if self.table.contains(username, password) {
            Ok(())
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Validate the request's `Authorization` header.
    ///
    /// On success the untouched responder is handed back in `Ok(Some(_))` and the caller
    /// completes the protected response.  On any authentication failure exactly one `401`
    /// with the `WWW-Authenticate` challenge is sent and `Ok(None)` is returned.  `Err` is
    /// only produced when writing the challenge itself fails.
    pub async fn validate<'buff, 'client, C: Read + Write>(
        &self,
        req: &Request<'buff>,
        resp: Responder<'buff, 'client, C>,
    ) -> Result<Option<Responder<'buff, 'client, C>>, ResponderError> {
        match self.authenticate(req.authorization) {
            Ok(()) => Ok(Some(resp)),
            Err(_) => {
                resp.with_status(StatusCode::Unauthorized)
                    .await?
                    .with_header(ResponseHeader::WwwAuthenticate(CHALLENGE))
                    .await?
                    .no_body()
                    .await?;

                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::String;

    use super::*;

    const USERS: [Credential<'static>; 2] = [
        Credential::new("admin", "88888888"),
        Credential::new("test", "12345678"),
    ];

    fn auth_over<'a>(table: &'a CredentialTable<'a>) -> BasicAuth<'a> {
        BasicAuth::new(table)
    }

    #[test]
    fn test_registered_credentials_accepted() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // base64("admin:88888888")
        assert_eq!(auth.authenticate(Some("Basic YWRtaW46ODg4ODg4ODg=")), Ok(()));
        // base64("test:12345678")
        assert_eq!(auth.authenticate(Some("Basic dGVzdDoxMjM0NTY3OA==")), Ok(()));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // base64("admin:wrong")
        assert_eq!(
            auth.authenticate(Some("Basic YWRtaW46d3Jvbmc=")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_missing_header_rejected() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        assert_eq!(auth.authenticate(None), Err(AuthError::MissingAuthHeader));
    }

    #[test]
    fn test_malformed_scheme_rejected() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // shorter than the scheme token must fail cleanly, not read out of bounds
        assert_eq!(auth.authenticate(Some("")), Err(AuthError::MalformedScheme));
        assert_eq!(
            auth.authenticate(Some("Bas")),
            Err(AuthError::MalformedScheme)
        );
        // scheme match is case sensitive
        assert_eq!(
            auth.authenticate(Some("basic YWRtaW46ODg4ODg4ODg=")),
            Err(AuthError::MalformedScheme)
        );
        assert_eq!(
            auth.authenticate(Some("Bearer YWRtaW46ODg4ODg4ODg=")),
            Err(AuthError::MalformedScheme)
        );
    }

    #[test]
    fn test_bad_base64_rejected() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // characters outside the standard alphabet
        assert_eq!(
            auth.authenticate(Some("Basic !!!!")),
            Err(AuthError::DecodeError)
        );
        // truncated padding
        assert_eq!(
            auth.authenticate(Some("Basic YWRtaW46ODg4ODg4ODg")),
            Err(AuthError::DecodeError)
        );
        // token longer than the decode buffer
        let mut long = String::from("Basic ");
        for _ in 0..64 {
            long.push_str("QUFB");
        }
        assert_eq!(auth.authenticate(Some(&long)), Err(AuthError::DecodeError));
    }

    #[test]
    fn test_empty_and_separatorless_tokens_rejected() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // zero length token decodes to nothing, so no separator
        assert_eq!(
            auth.authenticate(Some("Basic ")),
            Err(AuthError::MalformedToken)
        );
        // base64("admin88888888"), no colon
        assert_eq!(
            auth.authenticate(Some("Basic YWRtaW44ODg4ODg4OA==")),
            Err(AuthError::MalformedToken)
        );
    }

    #[test]
    fn test_separator_only_token_rejected() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // base64(":") - empty username and password
        assert_eq!(
            auth.authenticate(Some("Basic Og==")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_username_case_sensitive() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // base64("Admin:88888888")
        assert_eq!(
            auth.authenticate(Some("Basic QWRtaW46ODg4ODg4ODg=")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_no_prefix_matching() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        // base64("admin9:88888888") - username merely starting with a stored one
        assert_eq!(
            auth.authenticate(Some("Basic YWRtaW45Ojg4ODg4ODg4")),
            Err(AuthError::InvalidCredentials)
        );
        // base64("admin:888888889") - password with a matching prefix
        assert_eq!(
            auth.authenticate(Some("Basic YWRtaW46ODg4ODg4ODg5")),
            Err(AuthError::InvalidCredentials)
        );
        // base64("adm:88888888") - truncated username
        assert_eq!(
            auth.authenticate(Some("Basic YWRtOjg4ODg4ODg4")),
            Err(AuthError::InvalidCredentials)
        );
        // base64("admin:8888") - truncated password
        assert_eq!(
            auth.authenticate(Some("Basic YWRtaW46ODg4OA==")),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn test_validation_is_idempotent() {
        let table = CredentialTable::new(&USERS);
        let auth = auth_over(&table);

        let token = Some("Basic YWRtaW46ODg4ODg4ODg=");
        assert_eq!(auth.authenticate(token), Ok(()));
        assert_eq!(auth.authenticate(token), Ok(()));
    }
}
