use astrostack_core::image::{Image, ImageDescriptor};
use astrostack_core::io::write_ppm;

#[test]
fn writes_a_p6_header_and_quantized_rgb_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.ppm");

    let mut image = Image::new(ImageDescriptor::new(2, 1, 3));
    image.pixel_mut(0, 0).copy_from_slice(&[0.0, 0.5, 1.0]);
    image.pixel_mut(1, 0).copy_from_slice(&[1.0, 1.0, 1.0]);
    write_ppm(&path, &image, false).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let header = "P6 2 1 255\n";
    assert!(bytes.starts_with(header.as_bytes()));

    let pixels = &bytes[header.len()..];
    assert_eq!(pixels.len(), 6);
    assert_eq!(pixels[0], 0);
    assert_eq!(pixels[2], 255);
    assert_eq!(pixels[3], 255);
}

#[test]
fn writes_a_p5_header_for_single_channel_images() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray.ppm");

    let mut image = Image::new(ImageDescriptor::new(1, 1, 1));
    image.pixel_mut(0, 0)[0] = 0.5;
    write_ppm(&path, &image, false).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P5 1 1 255\n"));
}

#[test]
fn gray_as_rgb_flag_triplicates_into_a_p6() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gray_rgb.ppm");

    let mut image = Image::new(ImageDescriptor::new(1, 1, 1));
    image.pixel_mut(0, 0)[0] = 1.0;
    write_ppm(&path, &image, true).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"P6 1 1 255\n"));
    let pixels = &bytes[bytes.len() - 3..];
    assert_eq!(pixels, &[255, 255, 255]);
}

#[test]
fn out_of_range_values_are_clamped_not_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("clamped.ppm");

    let mut image = Image::new(ImageDescriptor::new(1, 1, 1));
    image.pixel_mut(0, 0)[0] = 2.0;
    write_ppm(&path, &image, false).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    let pixels = &bytes[bytes.len() - 1..];
    assert_eq!(pixels, &[255]);
}
