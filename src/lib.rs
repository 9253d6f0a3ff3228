//! # Frontlite
//!
//! `frontlite` is a **very** basic HTTP front end for embedded devices, aimed at `no_std`
//! and `no_alloc` use cases.  It serves the small administrative surface a device typically
//! exposes: an index page, a handful of scripts and stylesheets read from on-device storage,
//! and a login endpoint guarded by HTTP Basic Authentication.
//!
//! This crate provides:
//!
//! * encoding and decoding of HTTP requests and responses on the "wire".
//! * an ordered, first-match URI router dispatching to index, asset and login handlers.
//! * Basic-Auth validation of `Authorization: Basic <base64(user:pass)>` tokens against a
//!   fixed credential table, answering failures with a uniform `401` challenge.
//! * static content resolution through a `content::Storage` backend with content types
//!   selected by path suffix.
//!
//! This crate does **not** provide:
//!
//! * TLS, chunked transfer, sessions or cookies.
//! * any account lifecycle; the credential table is immutable for the process lifetime.
//! * network bring-up or filesystem mounting; connections and storage arrive through the
//!   `embedded_io_async` and `content::Storage` traits respectively.
//!
//! ## Basic Use
//!
//! Build an immutable [`auth::CredentialTable`] and a [`router::Router`] over it, your
//! route table and your [`content::Storage`] implementation, then wrap the router in a
//! [`server::Server`].  When a client connects on a TCP socket (or anything that implements
//! `embedded_io_async::{Read, Write}`), call `serve()` on the `Server` passing the "socket"
//! and a `&mut [u8]` buffer that will be used to read `Request` data into.  The buffer
//! should be large enough to receive any anticipated request including bodies.
//!
//! The router holds no mutable state, so one router may serve connections concurrently;
//! each dispatch owns its decoded-token and asset buffers on its own stack.
//!
//! ## Example
//!
//! ```
//! # use tokio;
//! use embedded_io_async::{Read, Write};
//!
//! use frontlite::auth::{Credential, CredentialTable};
//! use frontlite::content::{Storage, StorageError};
//! use frontlite::router::{DEFAULT_ROUTES, Router};
//! use frontlite::server::Server;
//!
//! const HTML_INDEX: &str = "<html>...</html>";
//!
//! struct Assets;
//!
//! impl Storage for Assets {
//!     async fn read<'buf>(
//!         &self,
//!         path: &str,
//!         buf: &'buf mut [u8],
//!     ) -> Result<&'buf [u8], StorageError> {
//!         // this would typically read from flash, e.g. a SPIFFS partition
//!         let bytes: &[u8] = match path {
//!             "/index.html" => HTML_INDEX.as_bytes(),
//!             _ => return Err(StorageError::NotFound),
//!         };
//!
//!         let dst = buf
//!             .get_mut(..bytes.len())
//!             .ok_or(StorageError::BufferExceeded)?;
//!         dst.copy_from_slice(bytes);
//!         Ok(dst)
//!     }
//! }
//!
//! # struct Client {
//! #     reader: &'static [u8],
//! #     written: Vec<u8>,
//! # }
//! #
//! # impl embedded_io_async::ErrorType for Client {
//! #     type Error = embedded_io_async::ErrorKind;
//! # }
//! #
//! # impl embedded_io_async::Read for Client {
//! #     async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
//! #         match self.reader.read(buf).await {
//! #             Ok(n) => Ok(n),
//! #             Err(_) => Err(embedded_io_async::ErrorKind::Other),
//! #         }
//! #     }
//! # }
//! #
//! # impl embedded_io_async::Write for Client {
//! #     async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
//! #         self.written.extend_from_slice(buf);
//! #         Ok(buf.len())
//! #     }
//! # }
//! #
//! async fn run_server() {
//!     // Client implements embedded_io_async::{Read, Write} (not shown)
//!     // this would typically be an implementation of a TCP Socket that implements the
//!     // traits. e.g. embassy_net::tcp::TcpSocket
//!     let mut client = Client {
//! #         reader: b"GET / HTTP/1.1\r\nHost: device.local\r\n\r\n",
//! #         written: Vec::new(),
//!     };
//!
//!     let users = [
//!         Credential::new("admin", "88888888"),
//!         Credential::new("test", "12345678"),
//!     ];
//!     let credentials = CredentialTable::new(&users);
//!
//!     let assets = Assets;
//!     let router = Router::new(DEFAULT_ROUTES, &credentials, &assets);
//!     let server = Server::new(router);
//!
//!     let mut http_buffer = [0u8; 2048];
//!     if server.serve(&mut client, &mut http_buffer[..]).await.is_err() {
//!         // handle error
//!     }
//! }
//! #
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! #     run_server().await;
//! # })
//! ```

#![no_std]
#![warn(missing_docs)]

mod ascii;
/// Basic Authentication and the credential table
pub mod auth;
/// Static content resolution and the storage seam
pub mod content;
/// HTTP Headers
pub mod header;
/// HTTP Requests
pub mod request;
/// HTTP responses
pub mod response;
/// URI routing
pub mod router;
/// HTTP server
pub mod server;

use embedded_io_async::Write;

pub(crate) enum WriteError {
    NetworkError,
}

pub(crate) trait HttpWrite {
    async fn write<T: Write>(self, writer: &mut T) -> Result<(), WriteError>;
}
