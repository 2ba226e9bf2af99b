//! Letter reveal timing table

use std::io::{self, Write};

use folio_layout::LetterReveal;

/// Write one row per letter: index, displayed character, start delay
///
/// Empty text produces just the header.
pub fn write_timeline<W: Write>(
    out: &mut W,
    text: &str,
    delay: f32,
    multiplier: f32,
) -> io::Result<usize> {
    let reveal = LetterReveal::new(text).delay(delay).multiplier(multiplier);

    writeln!(out, "{:>5}  {:<6}  {:>8}", "index", "letter", "delay")?;
    for letter in reveal.letters() {
        let shown = if letter.is_space() {
            "(nbsp)".to_string()
        } else {
            letter.display().to_string()
        };
        writeln!(
            out,
            "{:>5}  {:<6}  {:>7.3}s",
            letter.index,
            shown,
            reveal.delay_for(letter.index)
        )?;
    }

    Ok(reveal.len())
}
