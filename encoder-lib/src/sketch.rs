use crate::*;
use std::fmt::{self, Write};

/// Device-side settings that only affect the generated code.
#[derive(Clone, Debug)]
pub struct Target {
    /// `LiquidCrystal` constructor arguments (rs, enable, d4..d7).
    pub pins: Vec<u8>,
    /// Text columns passed to `lcd.begin`.
    pub lcd_columns: u32,
    /// Inserted verbatim after every frame.
    pub pause: String,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            pins: vec![22, 21, 19, 18, 17, 16],
            lcd_columns: 16,
            pause: "  delay(250);".into(),
        }
    }
}

/// Arduino sketch that's being built frame by frame.
#[derive(Debug)]
pub struct Sketch {
    code: String,
}

impl Sketch {
    pub fn new(params: &Params, target: &Target) -> Result<Self, fmt::Error> {
        let mut code = String::new();
        let pins: Vec<_> = target.pins.iter().map(|pin| pin.to_string()).collect();

        writeln!(code, "#include <LiquidCrystal.h>")?;
        writeln!(code, "LiquidCrystal lcd({});", pins.join(", "))?;
        writeln!(code)?;
        writeln!(code, "void setup()\n{{")?;
        writeln!(code, "  lcd.begin({}, {});", target.lcd_columns, params.rows())?;

        for row in 0..params.rows() {
            writeln!(code, "  lcd.setCursor(0,{});", row)?;

            for col in 0..params.columns() {
                writeln!(code, "  lcd.write(byte({}));", params.slot_idx(row, col))?;
            }
        }

        // `createChar` reads 8 rows no matter how tall the cells are
        let blank = Glyph::blank(params.cell_width(), 8);
        let rows: Vec<_> = blank.rows().map(bits).collect();

        writeln!(code, "  uint8_t a[] = {{{}}};", rows.join(","))?;

        Ok(Self { code })
    }

    pub fn comment(&mut self, text: &str) -> fmt::Result {
        writeln!(self.code, "//{}", text)
    }

    pub fn update(&mut self, update: &Update) -> fmt::Result {
        for (idx, row) in update.glyph.rows().enumerate() {
            writeln!(self.code, "  a[{}]={};", idx, bits(row))?;
        }

        writeln!(self.code, "  lcd.createChar({}, a);", update.slot)
    }

    pub fn pause(&mut self, target: &Target) -> fmt::Result {
        writeln!(self.code, "{}", target.pause)
    }

    pub fn finish(mut self, stats: &Stats) -> Result<String, fmt::Error> {
        writeln!(self.code, "}}")?;
        writeln!(self.code, "void loop(){{}}")?;
        writeln!(self.code, "//Changed: {}", stats.changed)?;
        writeln!(self.code, "//Total: {}", stats.total)?;

        match stats.percentage_emitted() {
            Some(pct) => writeln!(self.code, "// {:?} %", pct)?,
            None => writeln!(self.code, "// N/A %")?,
        }

        Ok(self.code)
    }
}

/// Renders a glyph row as a binary literal, e.g. `B01010`.
fn bits(row: &[bool]) -> String {
    let mut out = String::with_capacity(row.len() + 1);

    out.push('B');
    out.extend(row.iter().map(|&bit| if bit { '1' } else { '0' }));
    out
}
