//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Select Graphic Rendition codes and the attribute state they drive.

/// One of the sixteen terminal colors.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
    /// High intensity black
    BrightBlack,
    /// High intensity red
    BrightRed,
    /// High intensity green
    BrightGreen,
    /// High intensity yellow
    BrightYellow,
    /// High intensity blue
    BrightBlue,
    /// High intensity magenta
    BrightMagenta,
    /// High intensity cyan
    BrightCyan,
    /// High intensity white
    BrightWhite,
}

impl Color {
    const NORMAL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];
    const BRIGHT: [Color; 8] = [
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];
}

/// Underline style.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Underline {
    /// No underline
    #[default]
    None,
    /// Single line
    Single,
    /// Double line
    Double,
}

/// Blink speed.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Blink {
    /// Steady
    #[default]
    None,
    /// Under 150 per minute
    Slow,
    /// 150 per minute or more
    Rapid,
}

/// A single rendition change from an `m` sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GraphicRendition {
    /// 0: all attributes off
    Reset,
    /// 1
    Bold,
    /// 2
    Faint,
    /// 3
    Italic,
    /// 4
    Underline,
    /// 5
    BlinkSlow,
    /// 6
    BlinkRapid,
    /// 7: swap foreground and background
    Inverse,
    /// 8
    Conceal,
    /// 10
    Font1,
    /// 21
    UnderlineDouble,
    /// 22: neither bold nor faint
    NormalIntensity,
    /// 24
    NoUnderline,
    /// 25
    NoBlink,
    /// 27: undo inverse
    Positive,
    /// 28: undo conceal
    Reveal,
    /// 30-37 and 90-97
    Foreground(Color),
    /// 39 and 99
    ForegroundReset,
    /// 40-47 and 100-107
    Background(Color),
    /// 49 and 109
    BackgroundReset,
}

impl GraphicRendition {
    /// Map an SGR parameter value.
    pub fn from_code(code: usize) -> Option<GraphicRendition> {
        Some(match code {
            0 => GraphicRendition::Reset,
            1 => GraphicRendition::Bold,
            2 => GraphicRendition::Faint,
            3 => GraphicRendition::Italic,
            4 => GraphicRendition::Underline,
            5 => GraphicRendition::BlinkSlow,
            6 => GraphicRendition::BlinkRapid,
            7 => GraphicRendition::Inverse,
            8 => GraphicRendition::Conceal,
            10 => GraphicRendition::Font1,
            21 => GraphicRendition::UnderlineDouble,
            22 => GraphicRendition::NormalIntensity,
            24 => GraphicRendition::NoUnderline,
            25 => GraphicRendition::NoBlink,
            27 => GraphicRendition::Positive,
            28 => GraphicRendition::Reveal,
            30..=37 => GraphicRendition::Foreground(Color::NORMAL[code - 30]),
            39 | 99 => GraphicRendition::ForegroundReset,
            40..=47 => GraphicRendition::Background(Color::NORMAL[code - 40]),
            49 | 109 => GraphicRendition::BackgroundReset,
            90..=97 => GraphicRendition::Foreground(Color::BRIGHT[code - 90]),
            100..=107 => GraphicRendition::Background(Color::BRIGHT[code - 100]),
            _ => return None,
        })
    }
}

/// Display attributes accumulated from rendition changes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct GraphicAttributes {
    /// Bold intensity
    pub bold: bool,
    /// Faint intensity
    pub faint: bool,
    /// Italic
    pub italic: bool,
    /// Underline style
    pub underline: Underline,
    /// Blink speed
    pub blink: Blink,
    /// Foreground and background are swapped when drawn
    pub inverse: bool,
    /// Hidden text
    pub conceal: bool,
    /// Selected font, 0 is the primary font
    pub font: u8,
    /// Foreground color
    pub foreground: Color,
    /// Background color
    pub background: Color,
}

impl Default for GraphicAttributes {
    fn default() -> Self {
        GraphicAttributes {
            bold: false,
            faint: false,
            italic: false,
            underline: Underline::None,
            blink: Blink::None,
            inverse: false,
            conceal: false,
            font: 0,
            foreground: Color::White,
            background: Color::Black,
        }
    }
}

impl GraphicAttributes {
    /// Apply one change.
    pub fn apply(&mut self, rendition: GraphicRendition) {
        match rendition {
            GraphicRendition::Reset => *self = GraphicAttributes::default(),
            GraphicRendition::Bold => self.bold = true,
            GraphicRendition::Faint => self.faint = true,
            GraphicRendition::Italic => self.italic = true,
            GraphicRendition::Underline => self.underline = Underline::Single,
            GraphicRendition::BlinkSlow => self.blink = Blink::Slow,
            GraphicRendition::BlinkRapid => self.blink = Blink::Rapid,
            GraphicRendition::Inverse => self.inverse = true,
            GraphicRendition::Conceal => self.conceal = true,
            GraphicRendition::Font1 => self.font = 1,
            GraphicRendition::UnderlineDouble => self.underline = Underline::Double,
            GraphicRendition::NormalIntensity => {
                self.bold = false;
                self.faint = false;
            }
            GraphicRendition::NoUnderline => self.underline = Underline::None,
            GraphicRendition::NoBlink => self.blink = Blink::None,
            GraphicRendition::Positive => self.inverse = false,
            GraphicRendition::Reveal => self.conceal = false,
            GraphicRendition::Foreground(color) => self.foreground = color,
            GraphicRendition::ForegroundReset => self.foreground = Color::White,
            GraphicRendition::Background(color) => self.background = color,
            GraphicRendition::BackgroundReset => self.background = Color::Black,
        }
    }

    /// Apply changes in order; later entries win.
    pub fn apply_all(&mut self, renditions: &[GraphicRendition]) {
        for rendition in renditions {
            self.apply(*rendition);
        }
    }

    /// Colors as drawn, honouring inverse video.
    pub fn effective_colors(&self) -> (Color, Color) {
        if self.inverse {
            (self.background, self.foreground)
        } else {
            (self.foreground, self.background)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_ranges_map_to_palette() {
        assert_eq!(
            GraphicRendition::from_code(31),
            Some(GraphicRendition::Foreground(Color::Red))
        );
        assert_eq!(
            GraphicRendition::from_code(47),
            Some(GraphicRendition::Background(Color::White))
        );
        assert_eq!(
            GraphicRendition::from_code(94),
            Some(GraphicRendition::Foreground(Color::BrightBlue))
        );
        assert_eq!(
            GraphicRendition::from_code(100),
            Some(GraphicRendition::Background(Color::BrightBlack))
        );
        assert_eq!(GraphicRendition::from_code(99), Some(GraphicRendition::ForegroundReset));
        assert_eq!(GraphicRendition::from_code(109), Some(GraphicRendition::BackgroundReset));
    }

    #[test]
    fn unassigned_codes_are_rejected() {
        for code in [9, 11, 20, 23, 26, 38, 48, 98, 108, 256] {
            assert_eq!(GraphicRendition::from_code(code), None, "code {code}");
        }
    }

    #[test]
    fn later_changes_override_earlier_ones() {
        let mut attributes = GraphicAttributes::default();
        attributes.apply_all(&[
            GraphicRendition::Foreground(Color::Red),
            GraphicRendition::Bold,
            GraphicRendition::Foreground(Color::Green),
            GraphicRendition::NormalIntensity,
        ]);
        assert_eq!(attributes.foreground, Color::Green);
        assert!(!attributes.bold);
    }

    #[test]
    fn inverse_swaps_effective_colors_once() {
        let mut attributes = GraphicAttributes::default();
        attributes.apply(GraphicRendition::Inverse);
        attributes.apply(GraphicRendition::Inverse);
        assert_eq!(attributes.effective_colors(), (Color::Black, Color::White));
        attributes.apply(GraphicRendition::Positive);
        assert_eq!(attributes.effective_colors(), (Color::White, Color::Black));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut attributes = GraphicAttributes::default();
        attributes.apply_all(&[
            GraphicRendition::Bold,
            GraphicRendition::Underline,
            GraphicRendition::Conceal,
            GraphicRendition::Background(Color::Blue),
            GraphicRendition::Reset,
        ]);
        assert_eq!(attributes, GraphicAttributes::default());
    }
}
