use embedded_io_async::{Read, Write};

use crate::ascii::{AsciiInt, CR, LF, SP};
use crate::header::ResponseHeader;
use crate::request::Request;
use crate::{HttpWrite, WriteError};

const HTTP_PROTO: &str = "HTTP/1.1";

/// Responder error is returned as the error when responding to clients.  Generally users of the
/// frontlite library will not inspect this error, but pass it on from the handler implementations.
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResponderError {
    /// Network error writing data to the client
    NetworkError,
    /// Protocol error parsing supplied data
    ProtocolError(&'static str),
}

impl From<WriteError> for ResponderError {
    fn from(value: WriteError) -> Self {
        match value {
            WriteError::NetworkError => Self::NetworkError,
        }
    }
}

/// HTTP status code returned in a response
#[non_exhaustive]
#[derive(Clone, Copy)]
pub enum StatusCode {
    /// 200 Ok
    OK,
    /// 400 Bad Request
    BadRequest,
    /// 401 Unauthorized
    Unauthorized,
    /// 404 Not Found
    NotFound,
    /// 500 Server Error
    InternalServerError,
    /// Any other code
    Other(u16),
}

impl HttpWrite for StatusCode {
    #[rustfmt::skip]
    async fn write<T: Write>(self, writer: &mut T) -> Result<(), WriteError> {
        let other: AsciiInt;
        let data = match self {
            Self::OK => "200 OK",
            Self::BadRequest => "400 Bad Request",
            Self::Unauthorized => "401 Unauthorized",
            Self::NotFound => "404 Not Found",
            Self::InternalServerError => "500 Internal Server Error",
            Self::Other(n) => {
                other = AsciiInt::from(n as u64);
                other.as_str()
            }
        };

        writer.write_all(HTTP_PROTO.as_bytes()).await
            .and(writer.write_all(&[SP]).await
            .and(writer.write_all(data.as_bytes()).await
            .and(writer.write_all(&[CR, LF]).await
        ))).or(Err(WriteError::NetworkError))
    }
}

struct ResponderInner<'a, 'client, C: Read + Write> {
    status: StatusCode,
    server: ResponseHeader<'a>,
    client: &'client mut C,
}

impl<'a, 'client, C: Read + Write> ResponderInner<'a, 'client, C> {
    #[must_use = "http responder not finished with either `with_body` or `no_body` results in a client waiting for data"]
    async fn with_status(&mut self, status: StatusCode) -> Result<(), ResponderError> {
        status
            .write(self.client)
            .await
            .map_err(<WriteError as core::convert::Into<ResponderError>>::into)?;

        if ResponseHeader::Server("") != self.server {
            self.server
                .write(self.client)
                .await
                .map_err(<WriteError as core::convert::Into<ResponderError>>::into)?;
        }

        Ok(())
    }

    async fn no_body(self) -> Result<(), ResponderError> {
        self.client
            .write_all(&[CR, LF])
            .await
            .or(Err(ResponderError::NetworkError))?;

        Ok(())
    }

    async fn with_body(self, body: &[u8]) -> Result<(), ResponderError> {
        ResponseHeader::ContentLength(body.len())
            .write(self.client)
            .await?;

        self.client
            .write_all(&[CR, LF])
            .await
            .or(Err(ResponderError::NetworkError))?;

        if self.client.write_all(body).await.is_err() {
            return Err(ResponderError::NetworkError);
        }

        Ok(())
    }
}

/// Responder is the API provided to formulate HTTP responses to the client. A `Responder`
/// will transition to the sending state (`ResponderSending`) when a status is sent.
pub struct Responder<'a, 'client, C: Read + Write> {
    inner: ResponderInner<'a, 'client, C>,
}

impl<'a, 'client, C: Read + Write> Responder<'a, 'client, C> {
    /// Create a new responder.  The initial status is set to 200 OK which will be sent to the
    /// client if the user skips straight to sending a header.  The responder sets the Server
    /// header to the value of the Host header in the request.
    pub fn new(request: &Request<'a>, client: &'client mut C) -> Self {
        Self {
            inner: ResponderInner {
                client,
                status: StatusCode::OK,
                server: ResponseHeader::Server(request.host),
            },
        }
    }

    /// Set and send the provided status to the client.  Consumes the `self` and returns a new self
    /// that is in the Sending state.
    #[must_use = "http responder not finished with either `with_body` or `no_body` results in a client waiting for data"]
    pub async fn with_status(
        mut self,
        status: StatusCode,
    ) -> Result<ResponderSending<'a, 'client, C>, ResponderError> {
        self.inner.with_status(status).await?;

        Ok(ResponderSending { inner: self.inner })
    }

    #[must_use = "http responder not finished with either `with_body` or `no_body` results in a client waiting for data"]
    /// Sends the supplied header to the client.  Consumes
    /// the self returning a Self in the Sending state.
    pub async fn with_header(
        mut self,
        header: ResponseHeader<'a>,
    ) -> Result<ResponderSending<'a, 'client, C>, ResponderError> {
        self.inner.with_status(self.inner.status).await?;

        header.write(self.inner.client).await?;

        Ok(ResponderSending { inner: self.inner })
    }
}

/// ResponderSending is a responder for which a status has already been sent
pub struct ResponderSending<'a, 'client, C: Read + Write> {
    inner: ResponderInner<'a, 'client, C>,
}

impl<'a, 'client, C: Read + Write> ResponderSending<'a, 'client, C> {
    #[must_use = "http responder not finished with either `with_body` or `no_body` results in a client waiting for data"]
    /// Sends the supplied header to the client.  Consumes
    /// the self returning a Self in the Sending state.
    pub async fn with_header(
        self,
        header: ResponseHeader<'a>,
    ) -> Result<ResponderSending<'a, 'client, C>, ResponderError> {
        header.write(self.inner.client).await?;

        Ok(self)
    }

    /// Completes the response with no body.  Comsumes the self as it is not valid to produce any
    /// more data to the client in response to the active request.
    pub async fn no_body(self) -> Result<(), ResponderError> {
        self.inner.no_body().await
    }

    /// Completes the response with the supplied body setting the Content-Length to the length of the body.
    /// Comsumes the self as it is not valid to produce any more data to the client in response to the active request.
    pub async fn with_body(self, body: &[u8]) -> Result<(), ResponderError> {
        self.inner.with_body(body).await
    }
}
