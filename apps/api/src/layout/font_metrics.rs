//! Static AFM advance-width tables for the Times family (Text Measurer).
//!
//! Widths are in 1/1000 em, taken from the Adobe base-14 AFM files, so a
//! measurement here matches what a PDF viewer lays out for the unembedded
//! Type1 fonts. Tables are indexed by WinAnsi code from 0x20 to 0xFF,
//! index = code - 32. Code 39 is `quotesingle` and code 96 is `grave`.
//! Codes WinAnsi leaves undefined hold the width of `?`, the glyph the
//! encoder substitutes.

use crate::layout::encoding::win_ansi_byte;
use crate::layout::styles::{FontFace, TextStyle};

// ────────────────────────────────────────────────────────────────────────────
// Font metric table
// ────────────────────────────────────────────────────────────────────────────

/// Per-face metrics needed for measuring and placing text.
pub struct FontMetricTable {
    pub face: FontFace,
    widths: [u16; 224],
    /// Distance from the top of the line box to the baseline.
    pub ascender: u16,
    /// `(ascender - descender + line gap)`, all in 1/1000 em.
    pub line_height: u16,
}

impl FontMetricTable {
    /// Advance width of a single character in 1/1000 em, as drawn.
    pub fn char_width(&self, c: char) -> u16 {
        self.code_width(win_ansi_byte(c))
    }

    fn code_width(&self, code: u8) -> u16 {
        // Encoder output is never below 0x20.
        self.widths[usize::from(code.max(b' ')) - 32]
    }

    /// Measures the rendered width of a string in points at `size`.
    pub fn measure_str(&self, s: &str, size: f32) -> f32 {
        let units: u32 = s.chars().map(|c| u32::from(self.char_width(c))).sum();
        units as f32 * size / 1000.0
    }

    /// Height of one line of text in points at `size`.
    pub fn line_height_pt(&self, size: f32) -> f32 {
        f32::from(self.line_height) * size / 1000.0
    }

    /// Baseline offset below the top of the line box, in points.
    pub fn ascent_pt(&self, size: f32) -> f32 {
        f32::from(self.ascender) * size / 1000.0
    }
}

/// Rendered width of `text` under `style`, in points.
pub fn measure(text: &str, style: TextStyle) -> f32 {
    get_metrics(style.face).measure_str(text, style.size)
}

/// Height of one line under `style`, in points.
pub fn line_height(style: TextStyle) -> f32 {
    get_metrics(style.face).line_height_pt(style.size)
}

// ────────────────────────────────────────────────────────────────────────────
// Static width tables  (WinAnsi 0x20..=0xFF)
// ────────────────────────────────────────────────────────────────────────────

static TIMES_ROMAN_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Regular,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        278, 278, 564, 564, 564, 444, 921,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 722, 556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611,
        // [    \    ]    ^    _    `
        333, 278, 333, 469, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        500, 500, 500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444,
        // {    |    }    ~    DEL
        480, 200, 480, 541, 444,
        // €    -    ‚    ƒ    „    …    †    ‡    ˆ    ‰    Š    ‹    Œ    -    Ž    -
        500, 444, 333, 500, 444, 1000, 500, 500, 333, 1000, 556, 333, 889, 444, 611, 444,
        // -    ‘    ’    “    ”    •    –    —    ˜    ™    š    ›    œ    -    ž    Ÿ
        444, 333, 333, 444, 444, 350, 500, 1000, 333, 980, 389, 333, 722, 444, 444, 722,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 333, 500, 500, 500, 500, 200, 500, 333, 760, 276, 500, 564, 333, 760, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 564, 300, 300, 333, 500, 453, 250, 333, 300, 310, 500, 750, 750, 750, 444,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 722, 722, 722, 722, 722, 564, 722, 722, 722, 722, 722, 722, 556, 500,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        444, 444, 444, 444, 444, 444, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 500, 500, 500, 500, 500, 500, 564, 500, 500, 500, 500, 500, 500, 500, 500,
    ],
    ascender: 683,
    // 683 + 217 + 216 (FontBBox height minus ascender/descender span)
    line_height: 1116,
};

static TIMES_BOLD_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Bold,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        333, 333, 570, 570, 570, 500, 930,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        722, 778, 611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667,
        // [    \    ]    ^    _    `
        333, 278, 333, 581, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        556, 500, 556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444,
        // {    |    }    ~    DEL
        394, 220, 394, 520, 500,
        // €    -    ‚    ƒ    „    …    †    ‡    ˆ    ‰    Š    ‹    Œ    -    Ž    -
        500, 500, 333, 500, 500, 1000, 500, 500, 333, 1000, 556, 333, 1000, 500, 667, 500,
        // -    ‘    ’    “    ”    •    –    —    ˜    ™    š    ›    œ    -    ž    Ÿ
        500, 333, 333, 500, 500, 350, 500, 1000, 333, 1000, 389, 333, 722, 500, 444, 722,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 333, 500, 500, 500, 500, 220, 500, 333, 747, 300, 500, 570, 333, 747, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 570, 300, 300, 333, 556, 540, 250, 333, 300, 330, 500, 750, 750, 750, 500,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 389, 389, 389, 389,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 722, 778, 778, 778, 778, 778, 570, 778, 722, 722, 722, 722, 722, 611, 556,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        500, 500, 500, 500, 500, 500, 722, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 556, 500, 500, 500, 500, 500, 570, 500, 556, 556, 556, 556, 500, 556, 500,
    ],
    ascender: 683,
    line_height: 1153,
};

static TIMES_ITALIC_TABLE: FontMetricTable = FontMetricTable {
    face: FontFace::Italic,
    #[rustfmt::skip]
    widths: [
        // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        250, 333, 420, 500, 500, 833, 778, 214, 333, 333, 500, 675, 250, 333, 250, 278,
        // 0    1    2    3    4    5    6    7    8    9
        500, 500, 500, 500, 500, 500, 500, 500, 500, 500,
        // :    ;    <    =    >    ?    @
        333, 333, 675, 675, 675, 500, 920,
        // A    B    C    D    E    F    G    H    I    J    K    L    M
        611, 611, 667, 722, 611, 611, 722, 722, 333, 444, 667, 556, 833,
        // N    O    P    Q    R    S    T    U    V    W    X    Y    Z
        667, 722, 611, 722, 611, 500, 556, 722, 611, 833, 611, 556, 556,
        // [    \    ]    ^    _    `
        389, 278, 389, 422, 500, 333,
        // a    b    c    d    e    f    g    h    i    j    k    l    m
        500, 500, 444, 500, 444, 278, 500, 500, 278, 278, 444, 278, 722,
        // n    o    p    q    r    s    t    u    v    w    x    y    z
        500, 500, 500, 500, 389, 389, 278, 500, 444, 667, 444, 444, 389,
        // {    |    }    ~    DEL
        400, 275, 400, 541, 500,
        // €    -    ‚    ƒ    „    …    †    ‡    ˆ    ‰    Š    ‹    Œ    -    Ž    -
        500, 500, 333, 500, 556, 889, 500, 500, 333, 1000, 500, 333, 944, 500, 556, 500,
        // -    ‘    ’    “    ”    •    –    —    ˜    ™    š    ›    œ    -    ž    Ÿ
        500, 333, 333, 556, 556, 350, 500, 889, 333, 980, 389, 333, 667, 500, 389, 556,
        // nbsp ¡    ¢    £    ¤    ¥    ¦    §    ¨    ©    ª    «    ¬    shy  ®    ¯
        250, 389, 500, 500, 500, 500, 275, 500, 333, 760, 276, 500, 675, 333, 760, 333,
        // °    ±    ²    ³    ´    µ    ¶    ·    ¸    ¹    º    »    ¼    ½    ¾    ¿
        400, 675, 300, 300, 333, 500, 523, 250, 333, 300, 310, 500, 750, 750, 750, 500,
        // À    Á    Â    Ã    Ä    Å    Æ    Ç    È    É    Ê    Ë    Ì    Í    Î    Ï
        611, 611, 611, 611, 611, 611, 889, 667, 611, 611, 611, 611, 333, 333, 333, 333,
        // Ð    Ñ    Ò    Ó    Ô    Õ    Ö    ×    Ø    Ù    Ú    Û    Ü    Ý    Þ    ß
        722, 667, 722, 722, 722, 722, 722, 675, 722, 722, 722, 722, 722, 556, 611, 500,
        // à    á    â    ã    ä    å    æ    ç    è    é    ê    ë    ì    í    î    ï
        500, 500, 500, 500, 500, 500, 667, 444, 444, 444, 444, 444, 278, 278, 278, 278,
        // ð    ñ    ò    ó    ô    õ    ö    ÷    ø    ù    ú    û    ü    ý    þ    ÿ
        500, 500, 500, 500, 500, 500, 500, 675, 500, 500, 500, 500, 500, 444, 500, 444,
    ],
    ascender: 683,
    line_height: 1100,
};

/// Returns the static metric table for a face.
pub fn get_metrics(face: FontFace) -> &'static FontMetricTable {
    match face {
        FontFace::Regular => &TIMES_ROMAN_TABLE,
        FontFace::Bold => &TIMES_BOLD_TABLE,
        FontFace::Italic => &TIMES_ITALIC_TABLE,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
