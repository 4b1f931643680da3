//! Loader and viewer adapter scenarios: disk round-trips and contact
//! sheets over generated imagery.

use pix_core::ValueRange;
use pix_ops::{pattern, tone};
use pix_tests::{assert_buffers_close, checker_rgb};
use pix_view::ContactSheet;

#[test]
fn png_roundtrip_preserves_the_denormalized_form() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("checker.png");

    let original = checker_rgb(5, 7, 12.0, 230.0);
    pix_io::write_png(&path, &original).unwrap();

    let loaded = pix_io::read(&path).unwrap();
    assert_eq!(loaded.range(), ValueRange::Denormalized);
    assert_buffers_close(&loaded, &original, 0.0);
}

#[test]
fn normalized_results_survive_the_byte_boundary_within_rounding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("card.png");

    let card = pattern::tv_bars().unwrap();
    pix_io::write_png(&path, &card).unwrap();

    let loaded = pix_io::read(&path).unwrap().normalize();
    for (got, want) in loaded.data().iter().zip(card.data()) {
        assert!((got - want).abs() <= 1.0 / 255.0, "got {got}, want {want}");
    }
}

#[test]
fn contact_sheet_of_the_driver_pipeline_writes_and_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("sheet.png");

    let card = pattern::tv_bars().unwrap();
    let sheet = ContactSheet::new()
        .with_cell_size(22, 16)
        .with_columns(2)
        .with_gutter(2)
        .add("original", card.clone())
        .add("contrast", tone::adjust(&card, -0.8))
        .add("intensity", tone::adjust(&card, 0.8))
        .add("swatch", pattern::swatch_3x3().unwrap())
        .render()
        .unwrap();

    assert_eq!(sheet.panels.len(), 4);
    // Two columns, four panels -> two rows of cells.
    assert_eq!(sheet.image.height(), 2 * 16 + 3 * 2);
    assert_eq!(sheet.image.width(), 2 * 22 + 3 * 2);

    pix_io::write_png(&path, &sheet.image).unwrap();
    let loaded = pix_io::read(&path).unwrap();
    assert_eq!(
        (loaded.height(), loaded.width()),
        (sheet.image.height(), sheet.image.width())
    );
}
