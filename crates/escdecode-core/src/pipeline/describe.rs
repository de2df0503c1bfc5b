use std::fmt;

use crate::protocols::common::bytes::{be_value, to_hex};
use crate::protocols::esc::{EscAction, EscPacket};
use crate::registers::{AL_EVENT_REQUEST, FieldPart, FieldText, RegisterError, RegisterLookup};

const NO_DESCRIPTION: &str = "(no description)";
const UNKNOWN_REGISTER: &str = "(unknown register)";

/// One piece of a description; flagged pieces mark missing knowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Flagged(String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Flagged(text) => text,
        }
    }

    pub fn is_flagged(&self) -> bool {
        matches!(self, Segment::Flagged(_))
    }
}

/// Human-readable rendering of one ESC command.
///
/// `Display` yields the unstyled text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Description {
    segments: Vec<Segment>,
}

impl Description {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    fn push(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Plain(text.into()));
    }

    fn push_flagged(&mut self, text: impl Into<String>) {
        self.segments.push(Segment::Flagged(text.into()));
    }

    /// Append a decoded register value; warning parts become flagged.
    fn push_field(&mut self, text: FieldText) {
        for part in text.parts() {
            match part {
                FieldPart::Text(text) => self.push(text.as_str()),
                FieldPart::Warning(text) => self.push_flagged(text.as_str()),
            }
        }
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text())?;
        }
        Ok(())
    }
}

/// Describe a decoded packet against a register table.
///
/// The AL event clause is always present since the AL Event Request bytes
/// are sampled with every command header.
pub fn describe_packet<L>(packet: &EscPacket, registers: &L) -> Result<Description, RegisterError>
where
    L: RegisterLookup + ?Sized,
{
    let mut out = Description::new();
    out.push(format!("mcu {} ", packet.action));
    match packet.action {
        EscAction::ReadWait => {
            describe_register(&mut out, registers, packet.address, &packet.response_value)?
        }
        EscAction::Write => describe_register(&mut out, registers, packet.address, &packet.data)?,
        _ => out.push(NO_DESCRIPTION),
    }

    let al_event = u64::from(u16::from_be_bytes(packet.al_event));
    out.push(", when AL event(");
    match registers.decoder_of(AL_EVENT_REQUEST) {
        Some(field) => out.push_field(field.decode(AL_EVENT_REQUEST, al_event)?),
        None => out.push(format!("0x{}", to_hex(&packet.al_event))),
    }
    out.push(")");
    Ok(out)
}

fn describe_register<L>(
    out: &mut Description,
    registers: &L,
    address: u16,
    payload: &[u8],
) -> Result<(), RegisterError>
where
    L: RegisterLookup + ?Sized,
{
    out.push(format!("reg:{address:#x}"));
    let Some(name) = registers.name_of(address) else {
        out.push_flagged(UNKNOWN_REGISTER);
        return Ok(());
    };
    out.push(format!("({name})"));
    if payload.is_empty() {
        return Ok(());
    }

    out.push(format!(", data:0x{}", to_hex(payload)));
    match registers.decoder_of(address) {
        Some(field) => {
            let value = be_value(payload).ok_or(RegisterError::PayloadTooWide {
                address,
                len: payload.len(),
            })?;
            let text = field.decode(address, value)?;
            out.push("(");
            out.push_field(text);
            out.push(")");
        }
        None => out.push_flagged(NO_DESCRIPTION),
    }
    Ok(())
}
