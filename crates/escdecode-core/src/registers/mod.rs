//! ESC register registry.
//!
//! Static lookup data: register names and bit-field decoders, both keyed by
//! register address. The table is built once and shared read-only by every
//! pipeline.

mod bitfields;
pub mod error;
mod names;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

pub use error::RegisterError;

/// AL Event Request register, sampled on MISO with every command header.
pub const AL_EVENT_REQUEST: u16 = 0x0220;

/// Read-only register lookup consumed by the describer.
pub trait RegisterLookup {
    fn name_of(&self, address: u16) -> Option<&str>;
    fn decoder_of(&self, address: u16) -> Option<&BitField>;
}

/// One piece of a rendered register value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldPart {
    Text(String),
    /// Bits that are set but should not be.
    Warning(String),
}

/// Rendered register value; `Display` yields the unstyled text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldText {
    parts: Vec<FieldPart>,
}

impl FieldText {
    pub fn parts(&self) -> &[FieldPart] {
        &self.parts
    }

    pub fn has_warning(&self) -> bool {
        self.parts
            .iter()
            .any(|part| matches!(part, FieldPart::Warning(_)))
    }

    pub(crate) fn push(&mut self, text: impl Into<String>) {
        self.parts.push(FieldPart::Text(text.into()));
    }

    pub(crate) fn push_warning(&mut self, text: impl Into<String>) {
        self.parts.push(FieldPart::Warning(text.into()));
    }
}

impl From<String> for FieldText {
    fn from(text: String) -> Self {
        Self {
            parts: vec![FieldPart::Text(text)],
        }
    }
}

impl fmt::Display for FieldText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            match part {
                FieldPart::Text(text) | FieldPart::Warning(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Render {
    Text(fn(u64) -> String),
    Parts(fn(u64) -> FieldText),
}

/// Bit-field decoder for one register of a fixed width.
///
/// # Examples
/// ```
/// use escdecode_core::BitField;
///
/// let field = BitField::new(8, |value| format!("value={value}"));
/// assert_eq!(field.decode(0x0138, 0x1D).unwrap().to_string(), "value=29");
/// assert!(field.decode(0x0138, 0x100).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BitField {
    width: u32,
    render: Render,
}

impl BitField {
    pub const fn new(width: u32, render: fn(u64) -> String) -> Self {
        Self {
            width,
            render: Render::Text(render),
        }
    }

    /// Decoder whose output may flag individual bits.
    pub const fn with_parts(width: u32, render: fn(u64) -> FieldText) -> Self {
        Self {
            width,
            render: Render::Parts(render),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Render `value`, failing when it does not fit the register width.
    pub fn decode(&self, address: u16, value: u64) -> Result<FieldText, RegisterError> {
        if self.width < u64::BITS && value >> self.width != 0 {
            return Err(RegisterError::WidthExceeded {
                address,
                width: self.width,
                value,
            });
        }
        Ok(match self.render {
            Render::Text(render) => FieldText::from(render(value)),
            Render::Parts(render) => render(value),
        })
    }
}

/// Immutable register table.
#[derive(Debug, Clone, Default)]
pub struct RegisterTable {
    names: BTreeMap<u16, &'static str>,
    fields: BTreeMap<u16, BitField>,
}

static STANDARD: LazyLock<RegisterTable> = LazyLock::new(|| {
    RegisterTable::new(
        names::REGISTER_NAMES.iter().copied(),
        bitfields::REGISTER_FIELDS.iter().copied(),
    )
});

impl RegisterTable {
    pub fn new(
        names: impl IntoIterator<Item = (u16, &'static str)>,
        fields: impl IntoIterator<Item = (u16, BitField)>,
    ) -> Self {
        Self {
            names: names.into_iter().collect(),
            fields: fields.into_iter().collect(),
        }
    }

    /// The ESC register map shipped with the decoder.
    pub fn standard() -> &'static RegisterTable {
        &STANDARD
    }

    pub fn named_registers(&self) -> usize {
        self.names.len()
    }
}

impl RegisterLookup for RegisterTable {
    fn name_of(&self, address: u16) -> Option<&str> {
        self.names.get(&address).copied()
    }

    fn decoder_of(&self, address: u16) -> Option<&BitField> {
        self.fields.get(&address)
    }
}

#[cfg(test)]
mod tests {
    use super::{AL_EVENT_REQUEST, BitField, RegisterError, RegisterLookup, RegisterTable};

    #[test]
    fn standard_table_has_names_and_decoders() {
        let table = RegisterTable::standard();
        assert_eq!(table.name_of(0x0138), Some("RUN LED Override"));
        assert_eq!(table.name_of(0x0F80), Some("User RAM (start)"));
        assert!(table.name_of(0x0494).is_none());
        assert!(table.decoder_of(AL_EVENT_REQUEST).is_some());
        assert!(table.decoder_of(0x0F80).is_none());
    }

    #[test]
    fn every_decoder_has_a_name() {
        let table = RegisterTable::standard();
        for address in table.fields.keys() {
            assert!(
                table.name_of(*address).is_some(),
                "decoder without name at {address:#06x}"
            );
        }
    }

    #[test]
    fn width_violation_is_reported() {
        let field = BitField::new(16, |value| value.to_string());
        assert_eq!(field.decode(0x0140, 0xFFFF).unwrap().to_string(), "65535");
        assert_eq!(
            field.decode(0x0140, 0x1_0000),
            Err(RegisterError::WidthExceeded {
                address: 0x0140,
                width: 16,
                value: 0x1_0000
            })
        );
    }

    #[test]
    fn full_width_field_accepts_any_value() {
        let field = BitField::new(64, |_| String::from("ok"));
        assert_eq!(field.decode(0, u64::MAX).unwrap().to_string(), "ok");
    }

    #[test]
    fn custom_table_is_independent_of_standard() {
        let table = RegisterTable::new([(0x0010, "Station")], Vec::<(u16, BitField)>::new());
        assert_eq!(table.named_registers(), 1);
        assert_eq!(table.name_of(0x0010), Some("Station"));
        assert!(table.decoder_of(AL_EVENT_REQUEST).is_none());
    }
}
