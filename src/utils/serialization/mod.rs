use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Encodes values for writing to disk.
pub trait Serializer {
    fn serialize<T: Serialize>(&self, data: &T) -> serde_json::Result<Vec<u8>>;
}

/// Human-readable JSON with a configurable indent and no trailing newline.
pub struct PrettyJsonSerializer {
    indent: &'static [u8],
}

impl PrettyJsonSerializer {
    pub fn with_indent(indent: &'static [u8]) -> Self {
        Self { indent }
    }
}

impl Default for PrettyJsonSerializer {
    fn default() -> Self {
        Self::with_indent(b"  ")
    }
}

impl Serializer for PrettyJsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> serde_json::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        data.serialize(&mut serializer)?;
        Ok(buffer)
    }
}

/// Two-space indented JSON, as written for workflow test copies.
pub fn to_pretty_json<T: Serialize>(data: &T) -> serde_json::Result<Vec<u8>> {
    PrettyJsonSerializer::default().serialize(data)
}
