use embedded_io_async::{Read, Write};

use crate::request::{Request, RequestError};
use crate::response::{Responder, ResponderError};

/// HandlerError is returned by `RequestHandler` implementations.  Errors returned by `Responder`
/// method should be passed up in the `ResponderError` variant, other errors are a `CustomError`
#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandlerError {
    /// Errors returned by `Responder` methods
    ResponderError(ResponderError),
    /// Custom errors as specified by the `RequestHandler` implementation author
    CustomError(&'static str),
}

impl From<ResponderError> for HandlerError {
    fn from(value: ResponderError) -> Self {
        Self::ResponderError(value)
    }
}

impl From<&'static str> for HandlerError {
    fn from(value: &'static str) -> Self {
        Self::CustomError(value)
    }
}

/// Trait required to be implemeted be the resource that will be responsible for handling requests.
///
/// `frontlite` ships one implementation, `router::Router`, which covers the typical device
/// front end (index page, assets, authenticated login).  Custom handlers implement this trait
/// directly:
///
/// ```
/// use embedded_io_async::{Read, Write};
///
/// use frontlite::request::Request;
/// use frontlite::response::{Responder, StatusCode};
/// use frontlite::server::{RequestHandler, HandlerError};
///
/// struct Handler {}
///
/// impl RequestHandler for Handler {
///     async fn handle_request<'client, 'buff, C: Read + Write + 'client>(
///         &self,
///         req: Request<'buff>,
///         resp: Responder<'buff, 'client, C>
///     ) -> Result<(), HandlerError> {
///         match req.path {
///             "/" => {
///                 resp.with_status(StatusCode::OK)
///                     .await?
///                     .with_body(b"<html>...")
///                     .await?;
///             },
///             _ => {
///                 resp.with_status(StatusCode::NotFound)
///                     .await?
///                     .with_body(b"not found")
///                     .await?;
///             }
///         }
///
///         Ok(())
///     }
/// }
/// ```
pub trait RequestHandler {
    /// Called by the server passing a Request, and Responder.  The implementation should
    /// use the Responder to generate the appropriate HTTP response for the client.
    fn handle_request<'client, 'buff, C: Read + Write + 'client>(
        &self,
        req: Request<'buff>,
        resp: Responder<'buff, 'client, C>,
    ) -> impl Future<Output = Result<(), HandlerError>>;
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
/// ServerError is returned by the frontlite::server::Server:serve() method when any of the variants
/// occur.
pub enum ServerError {
    /// Error parsing HTTP protocol data
    ProtocolError(&'static str),
    /// Incomming data (request body) that exceeded the size of the provided
    /// buffer.  The value within the BufferExceeded indicates the incoming data size.
    BufferExceeded(u64),
    /// Error returned by handler
    HandlerError(HandlerError),
}

/// Server is the main struct to be used by users of the crate.  It is constructed with an
/// implementation of RequestHandler, provides a serve() method to be called on each new client
/// connection.
pub struct Server<H> {
    handler: H,
}

impl<H> Server<H>
where
    H: RequestHandler,
{
    /// Construct an Server using the provided implementation of RequestHandler
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// process requests from the client, calling the provided RequestHandler with the request and
    /// a Responder.  The result will be `OK(())` when the client disconnects.  The result will be
    /// an Err if there is a HTTP protocol error, or if a request is received that exceeds the
    /// buffer size as indicated by the request Content-Length.   If a client sends more data than
    /// is indicated by the Content-Length, then *Content-Length* bytes will be read as the body of
    /// the current request, and then subsequent bytes will be read as the next request likely
    /// resulting in a protocol error being returned.  Any Err(_) variant should be handled by
    /// disconnecting the client.
    pub async fn serve<C>(&self, client: &mut C, http_buff: &mut [u8]) -> Result<(), ServerError>
    where
        C: Read + Write,
    {
        loop {
            let mut http_buff_offset = 0;
            loop {
                let res = client.read(&mut http_buff[http_buff_offset..]).await;
                match res {
                    Ok(0) => {
                        if http_buff_offset > 0 {
                            // we filled the buffer while outstanding request data remains
                            return Err(ServerError::BufferExceeded(0));
                        }
                        return Ok(());
                    }
                    Ok(n) => {
                        http_buff_offset += n;
                        match Request::parse(&http_buff[..]) {
                            Ok(request) => {
                                // handle request for response
                                let resp = Responder::<'_, '_, _>::new(&request, client);
                                match self.handler.handle_request(request, resp).await {
                                    Ok(()) => break,
                                    Err(HandlerError::ResponderError(
                                        ResponderError::NetworkError,
                                    )) => return Ok(()),
                                    Err(HandlerError::ResponderError(
                                        ResponderError::ProtocolError(s),
                                    )) => return Err(ServerError::ProtocolError(s)),
                                    Err(e) => return Err(ServerError::HandlerError(e)),
                                }
                            }
                            Err(RequestError::ProtocolError(e)) => {
                                return Err(ServerError::ProtocolError(e));
                            }
                            Err(RequestError::Incomplete(_)) => continue,
                        };
                    }
                    Err(_) => return Ok(()),
                };
            }
        }
    }
}
