use serde::{de::DeserializeOwned, Serialize};
use rmp_serde::{encode, decode, from_read};
use base32::{Alphabet, encode as base32_enc, decode as base32_dec};
pub use base64::{decode as base64_decode, encode as base64_encode};

/// rmp encodes the serialized data as a canonical named map.
/// NOTE: Any struct to be serialized must declare its fields in the
/// lexicographic order of their wire keys, and elide default-valued
/// fields, as required by the algorand canonical msgpack form.
pub fn rmp_encode<Data: Serialize>(data: &Data) -> Result<Vec<u8>, encode::Error> {
  encode::to_vec_named(data)
}

/// rmp decodes the byte array reference into the type result.
/// Type must implement DeserializeOwned
pub fn rmp_decode<Data: DeserializeOwned>(buffer: &[u8]) -> Result<Data, decode::Error> {
  from_read(buffer)
}

/// RFC4648 base32 without padding. Both 36-byte addresses (58 chars) and
/// 32-byte transaction ids (52 chars) come out at their final length with
/// no truncation needed.
pub fn base32_encode(data: &[u8]) -> String {
  base32_enc(Alphabet::RFC4648 { padding: false }, data)
}

pub fn base32_decode(data: &str) -> Option<Vec<u8>> {
  base32_dec(Alphabet::RFC4648 { padding: false }, data)
}
