//! Bit-field renderers for the ESC registers the decoder understands.
//!
//! Every renderer receives a value already checked against the register
//! width by [`BitField::decode`].

use super::{BitField, FieldText};

pub(crate) const REGISTER_FIELDS: &[(u16, BitField)] = &[
    (0x0000, BitField::new(32, render_identification)),
    (0x0004, BitField::new(32, render_revision)),
    (0x0120, BitField::new(16, render_al_control)),
    (0x0130, BitField::new(16, render_al_status)),
    (0x0134, BitField::new(8, render_al_status_code)),
    (0x0138, BitField::new(8, render_run_led_override)),
    (0x0139, BitField::new(8, render_err_led_override)),
    (0x0140, BitField::new(16, render_pdi_control)),
    (super::AL_EVENT_REQUEST, BitField::with_parts(32, render_al_event_request)),
    (0x0440, BitField::new(8, render_watchdog_status)),
    (0x0800, BitField::new(8, render_sync_manager_status)),
];

const AL_STATES: &[(u64, &str)] = &[
    (0x1, "Init"),
    (0x2, "Pre-Operational"),
    (0x3, "Bootstrap"),
    (0x4, "Safe-Operational"),
    (0x8, "Operational"),
];

const RUN_LED_CODES: &[(u64, &str)] = &[
    (0x0, "Off (Init)"),
    (0x1, "Flash 1x (SafeOp)"),
    (0xD, "Blinking (PreOp)"),
    (0xE, "Flickering (Bootstrap)"),
    (0xF, "On (Operational)"),
];

const ERR_LED_CODES: &[(u64, &str)] = &[
    (0x0, "Off"),
    (0x1, "Flash 1x"),
    (0xD, "Blinking (PreOp)"),
    (0xE, "Flickering (Bootstrap)"),
    (0xF, "On (Operational)"),
];

const PDI_MODES: [&str; 4] = ["SPI", "I2C", "Reserved", "Digital I/O"];

/// Names of the AL Event Request bits 0..=7; bits 8..=23 are SyncManager
/// interrupts.
const AL_EVENT_BITS: [&str; 8] = [
    "AL Control Register has been written",
    "At least one change on DC Latch Inputs",
    "DC SYNC0",
    "DC SYNC1",
    "At least one SyncManager changed",
    "EEPROM command pending",
    "Has expired",
    "reserved bit set",
];
const RESERVED_EVENT_BIT: u32 = 7;
const SYNC_MANAGER_IRQ_BITS: std::ops::Range<u32> = 8..24;

fn bit(value: u64, index: u32) -> u64 {
    (value >> index) & 1
}

fn lookup(table: &[(u64, &'static str)], code: u64) -> Option<&'static str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == code)
        .map(|(_, name)| *name)
}

fn al_state_name(state: u64) -> &'static str {
    lookup(AL_STATES, state).unwrap_or("Unknown")
}

fn led_code_desc(table: &[(u64, &'static str)], code: u64) -> String {
    if (0x2..=0xC).contains(&code) {
        return format!("Flash {code}x");
    }
    lookup(table, code).unwrap_or("Unknown").to_string()
}

pub(crate) fn render_identification(value: u64) -> String {
    format!("Identification Register: 0x{value:08X}")
}

pub(crate) fn render_revision(value: u64) -> String {
    format!("Revision Register: 0x{value:08X}")
}

pub(crate) fn render_al_control(value: u64) -> String {
    let state = value & 0xF;
    format!(
        "AL Control: req state={} (0x{state:X}), Error Ind Ack={}, Device ID req={}",
        al_state_name(state),
        bit(value, 4),
        bit(value, 5)
    )
}

pub(crate) fn render_al_status(value: u64) -> String {
    let state = value & 0xF;
    format!(
        "State={} (0x{state:X}), Error Ind={}, Device ID loaded={}",
        al_state_name(state),
        bit(value, 4),
        bit(value, 5)
    )
}

pub(crate) fn render_al_status_code(value: u64) -> String {
    format!("AL status code:{value}")
}

fn render_led_override(label: &str, table: &[(u64, &'static str)], value: u64) -> String {
    let code = value & 0xF;
    let enabled = if bit(value, 4) == 1 {
        "Enabled"
    } else {
        "Disabled"
    };
    format!(
        "{label}: LED code=0x{code:X} ({}), Override={enabled}",
        led_code_desc(table, code)
    )
}

pub(crate) fn render_run_led_override(value: u64) -> String {
    render_led_override("RUN LED Override", RUN_LED_CODES, value)
}

pub(crate) fn render_err_led_override(value: u64) -> String {
    render_led_override("ERR LED Override", ERR_LED_CODES, value)
}

pub(crate) fn render_pdi_control(value: u64) -> String {
    let mode = value & 0x3;
    format!("PDI Control: Mode={} (0x{mode:X})", PDI_MODES[mode as usize])
}

pub(crate) fn render_al_event_request(value: u64) -> FieldText {
    let mut out = FieldText::default();
    let set = (0u32..SYNC_MANAGER_IRQ_BITS.end).filter(|index| bit(value, *index) == 1);
    for (position, index) in set.enumerate() {
        if position > 0 {
            out.push(", ");
        }
        match index {
            RESERVED_EVENT_BIT => out.push_warning(AL_EVENT_BITS[index as usize]),
            0..=7 => out.push(AL_EVENT_BITS[index as usize]),
            _ => out.push(format!("SyncManager {} interrupt pending", index - 8)),
        }
    }
    out
}

pub(crate) fn render_sync_manager_status(value: u64) -> String {
    let active: Vec<String> = (0u32..8)
        .filter(|index| bit(value, *index) == 1)
        .map(|index| format!("SM{index} Active"))
        .collect();
    if active.is_empty() {
        return "Sync Manager Status: No Active SMs".to_string();
    }
    format!("Sync Manager Status: {}", active.join(", "))
}

pub(crate) fn render_watchdog_status(value: u64) -> String {
    match value {
        0x00 => "Watchdog Status: No Error".to_string(),
        0x01 => "Watchdog Status: PDI Watchdog Triggered".to_string(),
        0x02 => "Watchdog Status: Sync Manager Watchdog Triggered".to_string(),
        other => format!("Watchdog Status: Unknown (0x{other:X})"),
    }
}
