use crate::path::{PathError, PathResult};
use std::borrow::Cow;

/// Percent-decodes a single path component. `+` is left untouched and the
/// decoded bytes must form valid UTF-8.
pub fn decode_component(input: &str) -> PathResult<String> {
    decode_component_cow(input).map(Cow::into_owned)
}

/// Borrowing variant of [`decode_component`]; allocates only when the input
/// contains an escape.
pub fn decode_component_cow(input: &str) -> PathResult<Cow<'_, str>> {
    let bytes = input.as_bytes();
    let Some(first) = memchr::memchr(b'%', bytes) else {
        return Ok(Cow::Borrowed(input));
    };

    let mut output = Vec::with_capacity(bytes.len());
    output.extend_from_slice(&bytes[..first]);

    let mut idx = first;
    while idx < bytes.len() {
        match bytes[idx] {
            b'%' => {
                if idx + 3 > bytes.len() {
                    return Err(PathError::InvalidPercentEncoding {
                        input: input.to_string(),
                        index: idx,
                    });
                }
                let value = decode_hex_pair(bytes[idx + 1], bytes[idx + 2]).ok_or_else(|| {
                    PathError::InvalidPercentEncoding {
                        input: input.to_string(),
                        index: idx,
                    }
                })?;
                output.push(value);
                idx += 3;
            }
            byte => {
                output.push(byte);
                idx += 1;
            }
        }
    }

    String::from_utf8(output)
        .map(Cow::Owned)
        .map_err(|_| PathError::InvalidUtf8AfterDecoding {
            input: input.to_string(),
        })
}

fn decode_hex_pair(hi: u8, lo: u8) -> Option<u8> {
    fn val(byte: u8) -> Option<u8> {
        match byte {
            b'0'..=b'9' => Some(byte - b'0'),
            b'a'..=b'f' => Some(byte - b'a' + 10),
            b'A'..=b'F' => Some(byte - b'A' + 10),
            _ => None,
        }
    }

    Some(val(hi)? << 4 | val(lo)?)
}
