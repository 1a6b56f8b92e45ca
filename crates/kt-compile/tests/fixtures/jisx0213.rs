// @generated by kutengen from variant `jisx0213`. Do not edit.

const TABLE: &[char] = &[
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0001}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{9b06}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{4eb9}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{7cd7}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
    '\u{0000}',
];

const MULTI_CHAR_TABLE: &[[char; 2]] = &[
    ['\u{304b}', '\u{309a}'],
];

pub fn code_point_to_chars(cp: u32) -> Option<&'static [char]> {
    let row = cp >> 8;
    let row = match row {
        0x124 => row - 0x124,
        0x172 => row - 0x172 + 1,
        0x221 => row - 0x221 + 2,
        0x274 => row - 0x274 + 3,
        _ => return None,
    };
    let col = cp & 0xff;
    if !(0x21..=0x7e).contains(&col) {
        return None;
    }
    let pos = (row * 94 + (col - 0x21)) as usize;
    let slot = TABLE.get(pos..=pos)?;
    match u32::from(slot[0]) {
        0 => None,
        c if c >= 0x80 => Some(slot),
        i => MULTI_CHAR_TABLE.get(i as usize - 1).map(|p| p.as_slice()),
    }
}
