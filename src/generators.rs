use std::num::NonZeroUsize;

use tracing::debug;

use crate::charsets;
use crate::entropy::{SecureRandomSource, SystemRandom};
use crate::errors::RandomError;

const INVALID_LENGTH: &str = "length must be a positive integer";
const EMPTY_CHARSET: &str = "character set cannot be empty";
const MULTIBYTE_CHARSET: &str = "character set must contain only single-byte characters";
const TOO_LARGE: &str = "length is too large to allocate";

/// Requested output size. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Length(NonZeroUsize);

impl Length {
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl TryFrom<usize> for Length {
    type Error = RandomError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        NonZeroUsize::new(n)
            .map(Length)
            .ok_or_else(|| RandomError::invalid_input(INVALID_LENGTH))
    }
}

macro_rules! length_from {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Length {
                type Error = RandomError;

                fn try_from(n: $t) -> Result<Self, Self::Error> {
                    usize::try_from(n)
                        .map_err(|_| RandomError::invalid_input(INVALID_LENGTH))?
                        .try_into()
                }
            }
        )*
    };
}

length_from!(i32, i64, u32, u64);

/// Random string of `length` characters drawn uniformly from `charset`.
///
/// `None` selects [`charsets::DEFAULT`]. Every character of the charset
/// must be a single byte, since positions are picked by byte offset.
/// Input is validated before the entropy source is touched.
pub fn generate_string<L>(length: L, charset: Option<&str>) -> Result<String, RandomError>
where
    L: TryInto<Length, Error = RandomError>,
{
    let length = length.try_into()?;
    let chars = validate_charset(charset)?;
    let output = reserve_string(length)?;
    let mut source = SystemRandom::new()?;

    fill_string(&mut source, output, length, chars)
}

pub fn generate_string_with<S, L>(
    source: &mut S,
    length: L,
    charset: Option<&str>,
) -> Result<String, RandomError>
where
    S: SecureRandomSource + ?Sized,
    L: TryInto<Length, Error = RandomError>,
{
    let length = length.try_into()?;
    let chars = validate_charset(charset)?;
    let output = reserve_string(length)?;

    fill_string(source, output, length, chars)
}

/// Lowercase hexadecimal token of exactly `length` characters.
///
/// Draws `ceil(length / 2)` random bytes and hex-encodes them, dropping the
/// last nibble when `length` is odd. Cheaper than [`generate_string`] with
/// [`charsets::HEX_LOWER`] since it needs no per-character range draw.
pub fn generate_token<L>(length: L) -> Result<String, RandomError>
where
    L: TryInto<Length, Error = RandomError>,
{
    let length = length.try_into()?;
    let encoded = reserve_token(length)?;
    let mut source = SystemRandom::new()?;

    fill_token(&mut source, encoded, length)
}

pub fn generate_token_with<S, L>(source: &mut S, length: L) -> Result<String, RandomError>
where
    S: SecureRandomSource + ?Sized,
    L: TryInto<Length, Error = RandomError>,
{
    let length = length.try_into()?;
    let encoded = reserve_token(length)?;

    fill_token(source, encoded, length)
}

fn validate_charset(charset: Option<&str>) -> Result<&[u8], RandomError> {
    let chars = charset.unwrap_or(charsets::DEFAULT);

    if chars.is_empty() {
        return Err(RandomError::invalid_input(EMPTY_CHARSET));
    }

    if chars.len() != chars.chars().count() {
        return Err(RandomError::invalid_input(MULTIBYTE_CHARSET));
    }

    Ok(chars.as_bytes())
}

/// Output buffer for a string, allocated before any entropy is drawn.
fn reserve_string(length: Length) -> Result<String, RandomError> {
    let mut output = String::new();
    output
        .try_reserve_exact(length.get())
        .map_err(|_| RandomError::invalid_input(TOO_LARGE))?;

    Ok(output)
}

/// Zeroed buffer for the hex encoding of `ceil(length / 2)` bytes.
fn reserve_token(length: Length) -> Result<Vec<u8>, RandomError> {
    let hex_len = length
        .get()
        .div_ceil(2)
        .checked_mul(2)
        .ok_or_else(|| RandomError::invalid_input(TOO_LARGE))?;

    let mut encoded = Vec::new();
    encoded
        .try_reserve_exact(hex_len)
        .map_err(|_| RandomError::invalid_input(TOO_LARGE))?;
    encoded.resize(hex_len, 0);

    Ok(encoded)
}

fn fill_string<S>(
    source: &mut S,
    mut output: String,
    length: Length,
    chars: &[u8],
) -> Result<String, RandomError>
where
    S: SecureRandomSource + ?Sized,
{
    let high = chars.len() - 1;

    for _ in 0..length.get() {
        let index = source.uniform_int(0, high)?;
        let byte = chars.get(index).copied().ok_or_else(|| {
            RandomError::EntropySourceFailure(format!(
                "source returned {} outside 0..={}",
                index, high
            ))
        })?;
        output.push(byte as char);
    }

    debug!(length = length.get(), charset_size = chars.len(), "generated random string");

    Ok(output)
}

fn fill_token<S>(
    source: &mut S,
    mut encoded: Vec<u8>,
    length: Length,
) -> Result<String, RandomError>
where
    S: SecureRandomSource + ?Sized,
{
    let bytes_needed = length.get().div_ceil(2);
    let bytes = source.random_bytes(bytes_needed)?;

    if bytes.len() != bytes_needed {
        return Err(RandomError::EntropySourceFailure(format!(
            "source returned {} bytes, expected {}",
            bytes.len(),
            bytes_needed
        )));
    }

    hex::encode_to_slice(&bytes, &mut encoded)
        .map_err(|e| RandomError::EntropySourceFailure(e.to_string()))?;
    encoded.truncate(length.get());

    debug!(length = length.get(), bytes = bytes_needed, "generated hex token");

    String::from_utf8(encoded).map_err(|e| RandomError::EntropySourceFailure(e.to_string()))
}
