/// Fixed defaults for the AppIcon set: paths, placeholder appearance and fonts

pub mod paths {
    /// Xcode asset catalog directory that receives every generated icon
    pub const OUTPUT_DIR: &str = "MeetingCopilot/Assets.xcassets/AppIcon.appiconset";

    /// Filename of the full-size source icon inside the output directory
    pub const SOURCE_FILENAME: &str = "icon_1024x1024.png";
}

pub mod placeholder {
    /// Edge length of the App Store marketing icon
    pub const SIZE: u32 = 1024;

    /// iOS system blue (#007AFF)
    pub const BACKGROUND: [u8; 3] = [0x00, 0x7A, 0xFF];

    pub const FOREGROUND: [u8; 3] = [0xFF, 0xFF, 0xFF];

    pub const LABEL: &str = "MC";
}

pub mod font {
    /// Helvetica ships with macOS as a TrueType collection; face 0 is the regular weight
    pub const SYSTEM_FONT_PATH: &str = "/System/Library/Fonts/Helvetica.ttc";

    /// Pixel height the label is rendered at
    pub const SIZE_PX: f32 = 400.0;

    /// Built-in glyph cells per font size unit: a 400px request gives 40px cells
    pub const BUILTIN_CELL_DIVISOR: f32 = 10.0;

    /// Upper bound on a built-in glyph cell edge in pixels
    pub const BUILTIN_MAX_CELL: u32 = 4096;
}
