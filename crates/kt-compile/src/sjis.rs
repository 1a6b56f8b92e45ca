//! Shift_JIS byte pair → ku-ten.
//!
//! Fixed arithmetic from the Shift_JIS byte layout: a trail byte above 0x9e
//! selects the even row of the pair addressed by the lead byte, and the lead
//! byte mapping changes slope at 0xe0 (the gap left for half-width katakana).

/// Raw ku-ten numbers for a lead/trail pair. Not range-checked: garbage bytes
/// give values outside `[1, 94]`, possibly negative.
///
/// # Example
/// ```
/// use kt_compile::sjis::sjis_to_kuten;
/// assert_eq!(sjis_to_kuten(0x88, 0x9f), (16, 1));
/// assert_eq!(sjis_to_kuten(0xed, 0x9f), (90, 1));
/// assert_eq!(sjis_to_kuten(0xef, 0xfc), (94, 94));
/// ```
#[must_use]
pub fn sjis_to_kuten(lead: u8, trail: u8) -> (i32, i32) {
    let lead = i32::from(lead);
    let trail = i32::from(trail);

    let even = trail > 158;
    let ten = if even {
        trail - 158
    } else if trail < 128 {
        trail - 63
    } else {
        trail - 64
    };

    let mut ku = if lead < 224 { lead * 2 - 257 } else { lead * 2 - 385 };
    if even {
        ku += 1;
    }
    (ku, ten)
}

/// [`sjis_to_kuten`] restricted to `ku ∈ rows` and `ten ∈ [1, 94]`.
///
/// Returns the raw pair as the error so callers can report it.
///
/// # Errors
/// `Err((ku, ten))` when either value falls outside its range.
pub fn sjis_to_kuten_in(lead: u8, trail: u8, rows: [u8; 2]) -> Result<(u8, u8), (i32, i32)> {
    let (ku, ten) = sjis_to_kuten(lead, trail);
    let ku_ok = (i32::from(rows[0])..=i32::from(rows[1])).contains(&ku);
    let ten_ok = (1..=94).contains(&ten);
    if ku_ok && ten_ok {
        Ok((ku as u8, ten as u8))
    } else {
        Err((ku, ten))
    }
}
