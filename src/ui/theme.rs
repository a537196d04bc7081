use ansi_term::Style;

/// Green terminal palette.
pub mod palette {
    use ansi_term::Colour;

    pub const NEON: Colour = Colour::RGB(0x00, 0xff, 0x66); // directories
    pub const AQUA: Colour = Colour::RGB(0x00, 0xff, 0xaa); // symlinks
    pub const LEAF: Colour = Colour::RGB(0x00, 0xe7, 0x56); // size numbers
    pub const MID: Colour = Colour::RGB(0x00, 0xcc, 0x55); // file names
    pub const DARK: Colour = Colour::RGB(0x00, 0x66, 0x33); // hidden names, file tags
    pub const DIM: Colour = Colour::RGB(0x00, 0x5c, 0x2e); // headers, units, counts
    pub const FAINT: Colour = Colour::RGB(0x00, 0x3d, 0x1a); // separators, placeholders
    pub const RED: Colour = Colour::RGB(0xff, 0x33, 0x34); // errors
}

/// What a piece of report text is, independent of how it is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Header,
    Separator,
    DirTag,
    FileTag,
    LinkTag,
    DirName,
    FileName,
    HiddenName,
    LinkName,
    Ext,
    ExtDash,
    SizeNum,
    SizeUnit,
    SizeDash,
    Count,
    Error,
}

/// Pure role-to-style mapping; every presentation attribute of the
/// report lives here.
pub fn style_for(role: Role) -> Style {
    use palette::*;

    match role {
        Role::Header => DIM.normal(),
        Role::Separator => FAINT.normal(),
        Role::DirTag => NEON.bold(),
        Role::FileTag => DARK.normal(),
        Role::LinkTag => AQUA.normal(),
        Role::DirName => NEON.bold(),
        Role::FileName => MID.normal(),
        Role::HiddenName => DARK.normal(),
        Role::LinkName => AQUA.normal(),
        Role::Ext => DIM.normal(),
        Role::ExtDash => DARK.normal(),
        Role::SizeNum => LEAF.normal(),
        Role::SizeUnit => DIM.normal(),
        Role::SizeDash => FAINT.normal(),
        Role::Count => DIM.normal(),
        Role::Error => RED.normal(),
    }
}

/// Decoration layer for the report. With color off, `paint` is the
/// identity on its text argument, so piped output and tests see the
/// report byte-for-byte unstyled.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn for_stream(is_terminal: bool) -> Self {
        Self { color: is_terminal }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        if self.color {
            style_for(role).paint(text).to_string()
        } else {
            text.to_string()
        }
    }
}
