//! Serde helpers shared by the serializable types.

/// (De)serializes a byte vector as a hex string.
///
/// Serialization emits uppercase hex; deserialization accepts either case.
pub mod hex_bytes {
    use data_encoding::HEXUPPER;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&HEXUPPER.encode(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        crate::descriptors::decode_hex(&hex).map_err(D::Error::custom)
    }
}
