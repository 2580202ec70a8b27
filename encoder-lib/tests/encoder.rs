use image::Rgb;
use lcd_glyph_encoder_lib::{Encoder, FirstFrame, Params, PixelGrid, RgbImage, Stats, Target};

fn pattern(x: u32, y: u32) -> bool {
    (x + 2 * y) % 3 == 0
}

fn grid(f: impl FnMut(u32, u32) -> bool) -> PixelGrid {
    PixelGrid::from_fn(23, 17, f)
}

fn encode(params: &Params, grids: &[PixelGrid]) -> (Stats, String) {
    let target = Target::default();
    let mut encoder = Encoder::new(params, &target).unwrap();

    for (idx, grid) in grids.iter().enumerate() {
        encoder.add(&format!("frame_{:02}.png", idx), grid).unwrap();
    }

    encoder.finish().unwrap()
}

#[test]
fn three_pixels_in_first_slot() {
    let grids = [
        grid(pattern),
        grid(|x, y| pattern(x, y) ^ (x == 1 && y < 3)),
    ];

    for (threshold, expected) in [(0, 1), (2, 1), (3, 0)] {
        let params = Params::default().with_threshold(threshold);
        let (stats, code) = encode(&params, &grids);

        assert_eq!(stats.changed, expected, "threshold {}", threshold);
        assert_eq!(stats.total, 8);
        assert_eq!(code.matches("lcd.createChar(0, a);").count(), expected);
        assert_eq!(code.matches("lcd.createChar(").count(), expected);
    }
}

#[test]
fn too_small_image_is_skipped() {
    let params = Params::default();
    let target = Target::default();
    let mut encoder = Encoder::new(&params, &target).unwrap();

    assert!(encoder.add("a.png", &grid(pattern)).unwrap());
    assert!(!encoder.add("b.png", &PixelGrid::from_fn(20, 16, |_, _| true)).unwrap());

    // compared with `a.png`, not with the skipped image
    assert!(encoder.add("c.png", &grid(pattern)).unwrap());

    let (stats, code) = encoder.finish().unwrap();

    assert_eq!(stats.frames, 2);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.total, 8);
    assert_eq!(stats.changed, 0);
    assert!(code.contains("//processing  b.png\n//skipped: image is 20x16, at least 23x17 is required\n"));
    assert_eq!(code.matches("  delay(250);").count(), 2);
}

#[test]
fn single_image() {
    let (stats, code) = encode(&Params::default(), &[grid(pattern)]);

    assert_eq!(stats.total, 0);
    assert_eq!(stats.percentage_emitted(), None);
    assert!(!code.contains("createChar"));
    assert!(code.contains("//first frame is not drawn"));
    assert!(code.ends_with("//Changed: 0\n//Total: 0\n// N/A %\n"));
}

#[test]
fn no_images() {
    let (stats, code) = encode(&Params::default(), &[]);

    assert_eq!(stats, Default::default());
    assert!(code.starts_with("#include <LiquidCrystal.h>\n"));
    assert!(code.contains("B00000};\n}\nvoid loop(){}\n"));
    assert!(code.ends_with("// N/A %\n"));
}

#[test]
fn full_first_frame() {
    let params = Params::default().with_first_frame(FirstFrame::Full);

    // slot 3 is blank
    let first = grid(|x, y| pattern(x, y) && !(x >= 18 && y < 8));
    let (stats, code) = encode(&params, &[first.clone(), first]);

    // blank slots get defined too, the display memory starts out undefined
    assert_eq!(stats.total, 16);
    assert_eq!(stats.changed, 8);
    assert_eq!(code.matches("lcd.createChar(").count(), 8);
    assert!(code.contains("  a[0]=B00000;\n  a[1]=B00000;\n  a[2]=B00000;\n  a[3]=B00000;\n  a[4]=B00000;\n  a[5]=B00000;\n  a[6]=B00000;\n  a[7]=B00000;\n  lcd.createChar(3, a);\n"));
    assert!(!code.contains("first frame is not drawn"));
    assert!(code.ends_with("// 50.0 %\n"));
}

#[test]
fn sketch_layout() {
    let grids = [
        grid(|_, _| false),
        grid(|x, y| x == 0 && (y == 0 || y == 7)),
    ];

    let (_, code) = encode(&Params::default(), &grids);

    let expected = "\
//processing  frame_00.png
//first frame is not drawn, it only seeds the comparison
  delay(250);
//processing  frame_01.png
  a[0]=B10000;
  a[1]=B00000;
  a[2]=B00000;
  a[3]=B00000;
  a[4]=B00000;
  a[5]=B00000;
  a[6]=B00000;
  a[7]=B10000;
  lcd.createChar(0, a);
  delay(250);
}
void loop(){}
//Changed: 1
//Total: 8
// 12.5 %
";

    assert!(code.ends_with(expected), "{}", code);
}

#[test]
fn binarized_images() {
    let dark = RgbImage::from_pixel(23, 17, Rgb([10, 10, 10]));
    let mut lit = dark.clone();

    for (x, y, pixel) in lit.enumerate_pixels_mut() {
        if x >= 12 && y >= 9 {
            *pixel = Rgb([250, 250, 250]);
        }
    }

    let grids = [PixelGrid::binarize(&dark, 127), PixelGrid::binarize(&lit, 127)];
    let (stats, code) = encode(&Params::default(), &grids);

    // slots 6 and 7 cover x >= 12 on the second row
    assert_eq!(stats.changed, 2);
    assert!(code.contains("lcd.createChar(6, a);"));
    assert!(code.contains("lcd.createChar(7, a);"));
}
