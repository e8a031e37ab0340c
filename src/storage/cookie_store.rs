//! Browser cookie adapter
//!
//! Request-scoped: built from the incoming `Cookie` header, it answers reads
//! from those cookies and turns writes and deletes into `Set-Cookie` header
//! values for the response. Values are URL-encoded.

use super::{KeyValueStore, StorageError};
use crate::services::time_provider::SharedTimeProvider;
use chrono::{DateTime, Duration, Utc};
use std::collections::{BTreeMap, HashMap};
use url::form_urlencoded;

/// Expiry used to delete a cookie
const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Largest `name=value` pair browsers are required to keep (RFC 6265 §6.1)
pub const MAX_COOKIE_BYTES: usize = 4096;

/// Cookie jar for a single request/response exchange
pub struct CookieStore {
    cookies: HashMap<String, String>,
    pending: BTreeMap<String, String>,
    time_provider: SharedTimeProvider,
}

impl CookieStore {
    /// Jar holding the given `(name, raw value)` pairs
    pub fn from_pairs<'a, I>(pairs: I, time_provider: SharedTimeProvider) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Self {
            cookies: pairs
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            pending: BTreeMap::new(),
            time_provider,
        }
    }

    /// Jar parsed from a raw `Cookie` header value (`a=1; b=2`)
    pub fn from_header(header: &str, time_provider: SharedTimeProvider) -> Self {
        let pairs = header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .map(|(name, value)| (name.trim(), value.trim()));
        Self::from_pairs(pairs, time_provider)
    }

    /// Empty jar, as for a first visit
    pub fn empty(time_provider: SharedTimeProvider) -> Self {
        Self::from_pairs(std::iter::empty(), time_provider)
    }

    /// Drain the `Set-Cookie` values produced since the last call,
    /// one per key, last write wins.
    pub fn take_set_cookies(&mut self) -> Vec<String> {
        std::mem::take(&mut self.pending).into_values().collect()
    }

    fn set_cookie(name: &str, encoded_value: &str, expires: &str) -> String {
        format!("{name}={encoded_value}; Expires={expires}; Path=/; SameSite=Strict")
    }
}

impl std::fmt::Debug for CookieStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CookieStore")
            .field("cookies", &self.cookies)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl KeyValueStore for CookieStore {
    fn read(&self, key: &str) -> Option<String> {
        self.cookies
            .get(key)
            .filter(|raw| !raw.is_empty())
            .map(|raw| decode_value(raw))
    }

    fn write(&mut self, key: &str, value: &str, ttl: Duration) -> Result<(), StorageError> {
        if key.is_empty() || key.contains(['=', ';', ' ']) {
            return Err(StorageError::Encoding(format!("invalid cookie name {key:?}")));
        }

        let encoded = encode_value(value);
        let pair_len = key.len() + 1 + encoded.len();
        if pair_len > MAX_COOKIE_BYTES {
            return Err(StorageError::Encoding(format!(
                "cookie {key:?} is {pair_len} bytes, over the {MAX_COOKIE_BYTES} byte limit"
            )));
        }

        let expires = http_date(self.time_provider.expiry_after(ttl));
        self.pending
            .insert(key.to_string(), Self::set_cookie(key, &encoded, &expires));
        self.cookies.insert(key.to_string(), encoded);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StorageError> {
        self.pending
            .insert(key.to_string(), Self::set_cookie(key, "", EXPIRED));
        self.cookies.remove(key);
        Ok(())
    }
}

/// IMF-fixdate as used by the `Expires` attribute
fn http_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

fn encode_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

fn decode_value(raw: &str) -> String {
    // Encoded values never contain a bare '&', so the pair parser sees exactly one pair.
    form_urlencoded::parse(format!("v={raw}").as_bytes())
        .next()
        .map(|(_, value)| value.into_owned())
        .unwrap_or_default()
}
