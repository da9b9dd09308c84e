//! Control codes embedded in message text.
//!
//! A control code is a two-byte opcode whose first byte cannot start a double-byte character.
//! Some opcodes are followed by operands, counted in 16-bit units. Decoded text renders each
//! opcode as `[Alias]` when the registry names it, and as `[XX YY]` otherwise.

use std::{collections::HashMap, sync::LazyLock};

/// Opcode that plays a voice clip named by a null-terminated ASCII path.
///
/// Its operand is not a fixed number of units: the path runs until a null byte, and a second
/// null byte follows it.
pub const VOICE_OPCODE: u16 = 0xF81B;

/// A recognized control code
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct ControlCodeSpec {
    /// The two bytes of the opcode, first byte in the high half
    pub opcode: u16,

    /// Number of 16-bit operand units following the opcode
    pub operand_units: u16,

    /// Name used when rendering the opcode in text
    pub alias: Option<&'static str>,
}

impl ControlCodeSpec {
    const fn new(opcode: u16, operand_units: u16, alias: &'static str) -> Self {
        Self {
            opcode,
            operand_units,
            alias: Some(alias),
        }
    }
}

/// Every control code with known operands or a name
pub const CONTROL_CODES: &[ControlCodeSpec] = &[
    ControlCodeSpec::new(0x8001, 0, "LineBreak"),
    ControlCodeSpec::new(0x8002, 0, "PageBreak"),
    // Shows the following text as the speaker's name, up to [00 00]
    ControlCodeSpec::new(0xF812, 0, "NpcTelop"),
    // Voice group then clip id
    ControlCodeSpec::new(0xF813, 4, "VoiceClip"),
    ControlCodeSpec::new(VOICE_OPCODE, 0, "Voice"),
    ControlCodeSpec::new(0xF85A, 1, "SkillSubheader"),
    ControlCodeSpec::new(0xF8F9, 1, "NpcTelopId"),
];

static BY_OPCODE: LazyLock<HashMap<u16, &'static ControlCodeSpec>> =
    LazyLock::new(|| CONTROL_CODES.iter().map(|code| (code.opcode, code)).collect());

static BY_ALIAS: LazyLock<HashMap<&'static str, &'static ControlCodeSpec>> = LazyLock::new(|| {
    CONTROL_CODES
        .iter()
        .filter_map(|code| code.alias.map(|alias| (alias, code)))
        .collect()
});

/// Find the registry entry for `opcode`.
pub fn lookup(opcode: u16) -> Option<&'static ControlCodeSpec> {
    BY_OPCODE.get(&opcode).copied()
}

/// Find the registry entry named `alias`.
pub fn lookup_alias(alias: &str) -> Option<&'static ControlCodeSpec> {
    BY_ALIAS.get(alias).copied()
}

/// Whether `byte` starts a control code rather than a character.
#[inline]
pub fn is_control_lead(byte: u8) -> bool {
    byte < 0x81 || (0xA0..=0xE0).contains(&byte) || (0xF0..=0xF9).contains(&byte)
}

/// Render a pair of bytes as `[XX YY]`.
pub fn render_pair(high: u8, low: u8) -> String {
    format!("[{high:02X} {low:02X}]")
}

/// Render an opcode by its alias, or as a byte pair when it has none.
pub fn render_opcode(opcode: u16) -> String {
    match lookup(opcode).and_then(|code| code.alias) {
        Some(alias) => format!("[{alias}]"),
        None => {
            let [high, low] = opcode.to_be_bytes();
            render_pair(high, low)
        }
    }
}
