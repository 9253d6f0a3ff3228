use embedded_io_async::Write;

use crate::ascii::{AsciiInt, CR, LF, atoi};
use crate::{HttpWrite, WriteError};

/// Host
pub const REQ_HEAD_HOST: &str = "Host";
/// User-Agent
pub const REQ_HEAD_USER_AGENT: &str = "User-Agent";
/// Authorization
pub const REQ_HEAD_AUTHORIZATION: &str = "Authorization";
/// Accept
pub const REQ_HEAD_ACCEPT: &str = "Accept";
/// Accept-Encoding
pub const REQ_HEAD_ACCEPT_ENCODING: &str = "Accept-Encoding";
/// Connection
pub const REQ_HEAD_CONNECTION: &str = "Connection";
/// Cache-Control
pub const REQ_HEAD_CACHE_CONTROL: &str = "Cache-Control";
/// Content-Length
pub const REQ_HEAD_CONTENT_LENGTH: &str = "Content-Length";
/// Content-Type
pub const REQ_HEAD_CONTENT_TYPE: &str = "Content-Type";

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RequestHeader<'a> {
    Host(&'a str),
    UserAgent(&'a str),
    Authorization(&'a str),
    Accept(&'a str),
    AcceptEncoding(&'a str),
    Connection(&'a str),
    CacheControl(&'a str),
    ContentLength(usize),
    ContentType(&'a str),
    Other(&'a str, &'a str),
}

impl<'a> TryFrom<(&'a str, &'a str)> for RequestHeader<'a> {
    type Error = Option<&'static str>;

    fn try_from(value: (&'a str, &'a str)) -> Result<Self, Self::Error> {
        match value.0 {
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_HOST) => Ok(RequestHeader::Host(value.1)),
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_USER_AGENT) => {
                Ok(RequestHeader::UserAgent(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_AUTHORIZATION) => {
                Ok(RequestHeader::Authorization(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_ACCEPT) => {
                Ok(RequestHeader::Accept(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_ACCEPT_ENCODING) => {
                Ok(RequestHeader::AcceptEncoding(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_CONNECTION) => {
                Ok(RequestHeader::Connection(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_CACHE_CONTROL) => {
                Ok(RequestHeader::CacheControl(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_CONTENT_TYPE) => {
                Ok(RequestHeader::ContentType(value.1))
            }
            _ if value.0.eq_ignore_ascii_case(REQ_HEAD_CONTENT_LENGTH) => {
                Ok(RequestHeader::ContentLength(
                    atoi(value.1.as_bytes()).ok_or("invalid content-length")? as usize,
                ))
            }
            _ => Ok(RequestHeader::Other(value.0, value.1)),
        }
    }
}

/// Server
pub const RESP_HEAD_SERVER: &str = "Server";
/// Connection
pub const RESP_HEAD_CONNECTION: &str = "Connection";
/// Date
pub const RESP_HEAD_DATE: &str = "Date";
/// Cache-Control
pub const RESP_HEAD_CACHE_CONTROL: &str = "Cache-Control";
/// WWW-Authenticate
pub const RESP_HEAD_WWW_AUTHENTICATE: &str = "WWW-Authenticate";
/// Content-Length
pub const RESP_HEAD_CONTENT_LENGTH: &str = "Content-Length";
/// Content-Type
pub const RESP_HEAD_CONTENT_TYPE: &str = "Content-Type";

#[allow(missing_docs)]
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ResponseHeader<'a> {
    Server(&'a str),
    Connection(&'a str),
    Date(&'a str),
    CacheControl(&'a str),
    WwwAuthenticate(&'a str),
    ContentLength(usize),
    ContentType(&'a str),
    Other(&'a str, &'a str),
}

impl<'a> HttpWrite for ResponseHeader<'a> {
    async fn write<T: Write>(self, writer: &mut T) -> Result<(), WriteError> {
        let len: AsciiInt;

        let val = match self {
            Self::Server(s) => {
                writer
                    .write_all(RESP_HEAD_SERVER.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                s
            }
            Self::Connection(s) => {
                writer
                    .write_all(RESP_HEAD_CONNECTION.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                s
            }
            Self::Date(s) => {
                writer
                    .write_all(RESP_HEAD_DATE.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                s
            }
            Self::CacheControl(s) => {
                writer
                    .write_all(RESP_HEAD_CACHE_CONTROL.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                s
            }
            Self::WwwAuthenticate(s) => {
                writer
                    .write_all(RESP_HEAD_WWW_AUTHENTICATE.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                s
            }
            Self::ContentLength(n) => {
                if n == 0 {
                    return Ok(());
                }
                writer
                    .write_all(RESP_HEAD_CONTENT_LENGTH.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;

                len = AsciiInt::from(n as u64);
                len.as_str()
            }
            Self::ContentType(s) => {
                writer
                    .write_all(RESP_HEAD_CONTENT_TYPE.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                s
            }
            Self::Other(k, v) => {
                writer
                    .write_all(k.as_bytes())
                    .await
                    .or(Err(WriteError::NetworkError))?;
                v
            }
        };

        writer
            .write_all(": ".as_bytes())
            .await
            .and(writer.write_all(val.as_bytes()).await)
            .and(writer.write_all(&[CR, LF]).await)
            .or(Err(WriteError::NetworkError))
    }
}
