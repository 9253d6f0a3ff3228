//! Static content resolution.
//!
//! The device keeps its web assets (index document, scripts, stylesheets) in an on-device
//! store behind the `Storage` trait: read a whole file by path into a caller owned buffer.
//! Mounting, partitions and wear belong to the implementation, not to this crate.
//!
//! `resolve` pairs the file bytes with an HTTP content type into a `Content` record.  A read
//! that produces no bytes never reaches the response body path; it is reported as an error so
//! the router can answer `404`/`500` instead.

/// Errors returned by `Storage` implementations.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// No file is stored at the requested path
    NotFound,
    /// The file is larger than the provided buffer
    BufferExceeded,
    /// The store failed to read the file
    Io,
}

/// Read access to the on-device file store.
///
/// Implementations read the whole file at `path` into `buf` and return the filled prefix.
/// A missing file is `NotFound`, a file larger than `buf` is `BufferExceeded`.  The returned
/// slice borrows from `buf`, so the bytes live exactly as long as the dispatch that owns the
/// buffer.
///
/// ```
/// use frontlite::content::{Storage, StorageError};
///
/// struct Assets;
///
/// impl Storage for Assets {
///     async fn read<'buf>(
///         &self,
///         path: &str,
///         buf: &'buf mut [u8],
///     ) -> Result<&'buf [u8], StorageError> {
///         let bytes: &[u8] = match path {
///             "/index.html" => b"<html>...</html>",
///             _ => return Err(StorageError::NotFound),
///         };
///
///         let dst = buf
///             .get_mut(..bytes.len())
///             .ok_or(StorageError::BufferExceeded)?;
///         dst.copy_from_slice(bytes);
///         Ok(dst)
///     }
/// }
/// ```
pub trait Storage {
    /// Read the whole file at `path` into `buf` returning the filled prefix.
    fn read<'buf>(
        &self,
        path: &str,
        buf: &'buf mut [u8],
    ) -> impl Future<Output = Result<&'buf [u8], StorageError>>;
}

/// A resolved file ready to be sent: the bytes and their HTTP content type.
#[derive(Debug)]
pub struct Content<'a> {
    /// File bytes, borrowed from the dispatch-owned buffer
    pub bytes: &'a [u8],
    /// Value for the Content-Type response header
    pub content_type: &'static str,
}

/// Errors produced while resolving a URI to servable content.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ContentError {
    /// No file at the resolved path, answered with `404`
    NotFound,
    /// The file exists but read produced no bytes, answered with `500`
    Empty,
    /// The store failed, answered with `500`
    Unreadable,
}

/// Map a URI path to the content type served for its suffix.  Paths with no recognised
/// suffix have no default type and are not served.
pub fn media_type(path: &str) -> Option<&'static str> {
    if path.ends_with(".html") {
        Some("text/html")
    } else if path.ends_with(".js") {
        Some("text/javascript")
    } else if path.ends_with(".css") {
        Some("text/css")
    } else {
        None
    }
}

/// Read the file at `path` through `storage` and pair it with `content_type`.
///
/// An absent file or a zero length read short circuits to an error; callers must not hand
/// either to the response body path.
pub async fn resolve<'buf, S: Storage>(
    storage: &S,
    path: &str,
    content_type: &'static str,
    buf: &'buf mut [u8],
) -> Result<Content<'buf>, ContentError> {
    let bytes = match storage.read(path, buf).await {
        Ok(bytes) => bytes,
        Err(StorageError::NotFound) => return Err(ContentError::NotFound),
        Err(_) => return Err(ContentError::Unreadable),
    };

    if bytes.is_empty() {
        return Err(ContentError::Empty);
    }

    Ok(Content {
        bytes,
        content_type,
    })
}
