//! Vendored TRON protocol messages.
//!
//! Hand-maintained Rust renditions of the subset of the TRON protocol
//! definitions (`core/Tron.proto`, `api/api.proto`) that the transport layer
//! touches, in the shape `prost-build`/`tonic-build` would emit. Keeping the
//! files vendored avoids a `protoc` build-time dependency and lets the same
//! structs carry both wire codecs:
//!
//! - [`prost::Message`] for the binary gRPC framing, and
//! - `serde` impls producing *canonical* protobuf JSON: proto field names as
//!   keys, `bytes` fields as base64, enums accepted by name or number, and
//!   unknown JSON fields ignored.
//!
//! The canonical-JSON side is what the HTTP transport decodes into after
//! reconciling the node's non-standard JSON (see `client::reconcile`).
//!
//! Unlisted proto fields are skipped by `prost` on decode and ignored by
//! `serde`, so a trimmed message set stays wire-compatible with full nodes.

pub mod api;
pub mod core;
pub mod wallet;

pub(crate) mod serde_helpers {
    /// `skip_serializing_if` helper mirroring protobuf JSON's
    /// omit-unpopulated-fields behavior for scalar fields.
    pub(crate) fn is_default<T: Default + PartialEq>(value: &T) -> bool {
        *value == T::default()
    }

    /// Generates a serde `with`-module for an `i32` field backed by a prost
    /// enumeration. Serializes to the proto value name; accepts either the
    /// name or the raw number on input, like a protobuf JSON decoder.
    macro_rules! enum_serde {
        ($vis:vis mod $name:ident for $ty:ty) => {
            $vis mod $name {
                #[allow(unused_imports)]
                use super::*;
                use serde::Deserialize as _;

                pub fn serialize<S>(
                    value: &i32,
                    serializer: S,
                ) -> ::core::result::Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    match <$ty>::try_from(*value) {
                        Ok(v) => serializer.serialize_str(v.as_str_name()),
                        Err(_) => serializer.serialize_i32(*value),
                    }
                }

                pub fn deserialize<'de, D>(
                    deserializer: D,
                ) -> ::core::result::Result<i32, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    #[derive(serde::Deserialize)]
                    #[serde(untagged)]
                    enum Repr {
                        Name(String),
                        Number(i32),
                    }

                    match Repr::deserialize(deserializer)? {
                        Repr::Name(name) => <$ty>::from_str_name(&name)
                            .map(|v| v as i32)
                            .ok_or_else(|| {
                                serde::de::Error::custom(format!(
                                    "unknown enum value: {name}"
                                ))
                            }),
                        Repr::Number(n) => Ok(n),
                    }
                }
            }
        };
    }

    pub(crate) use enum_serde;
}
