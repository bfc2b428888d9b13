//! Header list representation shared by the builder and the HPACK encoder.
//!
//! A [`HeaderRep`] owns or borrows its bytes. The distinction only matters
//! for lifetimes; both forms encode identically.

use std::{borrow::Cow, fmt};

/// One side (name or value) of a header entry.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct HeaderRep<'a>(Cow<'a, [u8]>);

impl<'a> HeaderRep<'a> {
    /// Wrap bytes borrowed from caller storage.
    #[must_use]
    pub const fn borrowed(bytes: &'a [u8]) -> Self { Self(Cow::Borrowed(bytes)) }

    /// Wrap bytes the header will own.
    #[must_use]
    pub fn owned(bytes: impl Into<Vec<u8>>) -> Self { Self(Cow::Owned(bytes.into())) }

    /// Return the raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] { &self.0 }

    /// Whether the bytes live in caller storage.
    #[must_use]
    pub const fn is_borrowed(&self) -> bool { matches!(self.0, Cow::Borrowed(_)) }

    /// Detach from caller storage, copying borrowed bytes.
    #[must_use]
    pub fn into_owned(self) -> HeaderRep<'static> { HeaderRep(Cow::Owned(self.0.into_owned())) }
}

impl AsRef<[u8]> for HeaderRep<'_> {
    fn as_ref(&self) -> &[u8] { self.as_bytes() }
}

impl<'a> From<&'a str> for HeaderRep<'a> {
    fn from(value: &'a str) -> Self { Self::borrowed(value.as_bytes()) }
}

impl<'a> From<&'a [u8]> for HeaderRep<'a> {
    fn from(value: &'a [u8]) -> Self { Self::borrowed(value) }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HeaderRep<'a> {
    fn from(value: &'a [u8; N]) -> Self { Self::borrowed(value) }
}

impl From<String> for HeaderRep<'_> {
    fn from(value: String) -> Self { Self::owned(value) }
}

impl From<Vec<u8>> for HeaderRep<'_> {
    fn from(value: Vec<u8>) -> Self { Self::owned(value) }
}

impl<'a> From<Cow<'a, [u8]>> for HeaderRep<'a> {
    fn from(value: Cow<'a, [u8]>) -> Self { Self(value) }
}

impl fmt::Debug for HeaderRep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(&self.0))
    }
}

/// A `(name, value)` header entry.
pub type Header<'a> = (HeaderRep<'a>, HeaderRep<'a>);

/// Convert any sequence of name/value pairs into a header list, preserving
/// order and duplicates.
///
/// ```
/// use h2seq::header::to_headers;
///
/// let headers = to_headers([(":method", "GET"), ("accept", "*/*")]);
/// assert_eq!(headers.len(), 2);
/// assert_eq!(headers[1].0.as_bytes(), b"accept");
/// ```
pub fn to_headers<'a, I, N, V>(pairs: I) -> Vec<Header<'a>>
where
    I: IntoIterator<Item = (N, V)>,
    N: Into<HeaderRep<'a>>,
    V: Into<HeaderRep<'a>>,
{
    pairs
        .into_iter()
        .map(|(name, value)| (name.into(), value.into()))
        .collect()
}
