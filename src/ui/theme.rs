use ratatui::style::Color;

use crate::catalog::Role;

pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0f, 0x2e);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const HINT_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ERROR_TEXT: Color = Color::Rgb(0xeb, 0x40, 0x34);
pub const LOADING_TEXT: Color = Color::Rgb(0xe3, 0xe8, 0xe5);
pub const SWAP_CONTROL: Color = Color::Rgb(0xe3, 0xe8, 0xe5);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);

const SOURCE_TEXT: Color = Color::Rgb(0x03, 0x05, 0x3d);
const SOURCE_BACKGROUND: Color = Color::Rgb(0xf2, 0xe6, 0x4d);
const SOURCE_BORDER: Color = Color::Rgb(0xf5, 0xe8, 0x3a);
const TARGET_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
const TARGET_BACKGROUND: Color = Color::Rgb(0x22, 0x27, 0x43);
const TARGET_BORDER: Color = Color::Rgb(0x3b, 0x3f, 0x58);

/// Panel colors, derived from the role alone.
pub struct PanelPalette {
    pub text: Color,
    pub background: Color,
    pub border: Color,
}

pub fn panel_palette(role: Role) -> PanelPalette {
    match role {
        Role::Source => PanelPalette {
            text: SOURCE_TEXT,
            background: SOURCE_BACKGROUND,
            border: SOURCE_BORDER,
        },
        Role::Target => PanelPalette {
            text: TARGET_TEXT,
            background: TARGET_BACKGROUND,
            border: TARGET_BORDER,
        },
    }
}
