use image::{DynamicImage, GenericImageView, Rgb, RgbImage};
use ios_icon_gen::manifest::Manifest;
use ios_icon_gen::resize::{generate_icons, load_source, resize_icon};

const IOS_BLUE: Rgb<u8> = Rgb([0, 0, 255]);

fn solid_source(color: Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_pixel(1024, 1024, color))
}

fn average_color(img: &DynamicImage) -> [f64; 3] {
    let rgb = img.to_rgb8();
    let count = (rgb.width() * rgb.height()) as f64;
    let mut sums = [0.0; 3];
    for pixel in rgb.pixels() {
        for (sum, value) in sums.iter_mut().zip(pixel.0) {
            *sum += value as f64;
        }
    }
    sums.map(|sum| sum / count)
}

#[test]
fn test_every_manifest_entry_is_written_at_its_size() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = Manifest::ios();

    let generated = generate_icons(&solid_source(IOS_BLUE), &manifest, dir.path()).unwrap();
    assert_eq!(generated.len(), manifest.len());

    for spec in &manifest {
        let path = dir.path().join(spec.filename);
        assert!(path.exists(), "missing {}", spec.filename);
        let (width, height) = image::image_dimensions(&path).unwrap();
        assert_eq!((width, height), (spec.size, spec.size), "{}", spec.filename);
    }
}

#[test]
fn test_generated_icons_follow_manifest_order() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = Manifest::ios();

    let generated = generate_icons(&solid_source(IOS_BLUE), &manifest, dir.path()).unwrap();
    let written: Vec<_> = generated.iter().map(|icon| icon.filename).collect();
    let expected: Vec<_> = manifest.iter().map(|spec| spec.filename).collect();
    assert_eq!(written, expected);
}

#[test]
fn test_output_directory_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("Assets.xcassets").join("AppIcon.appiconset");

    generate_icons(&solid_source(IOS_BLUE), &Manifest::ios(), &nested).unwrap();
    assert!(nested.join("icon_20x20.png").exists());
}

#[test]
fn test_solid_color_survives_resize() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("icon_1024x1024.png");
    solid_source(IOS_BLUE).save(&source_path).unwrap();

    let source = load_source(&source_path).unwrap();
    generate_icons(&source, &Manifest::ios(), dir.path()).unwrap();

    let icon = image::open(dir.path().join("icon_60x60@3x.png")).unwrap();
    assert_eq!(icon.dimensions(), (180, 180));

    let [r, g, b] = average_color(&icon);
    assert!(r < 2.0 && g < 2.0, "average {:?}", (r, g, b));
    assert!(b > 253.0, "average {:?}", (r, g, b));
}

#[test]
fn test_rerun_overwrites_with_identical_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = Manifest::ios();
    let source = DynamicImage::ImageRgb8(RgbImage::from_fn(1024, 1024, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    }));

    generate_icons(&source, &manifest, dir.path()).unwrap();
    let first = image::open(dir.path().join("icon_83.5x83.5@2x.png")).unwrap();

    generate_icons(&source, &manifest, dir.path()).unwrap();
    let second = image::open(dir.path().join("icon_83.5x83.5@2x.png")).unwrap();

    assert_eq!(first.as_bytes(), second.as_bytes());
    assert_eq!(first.as_bytes(), resize_icon(&source, 167).as_bytes());
}

#[test]
fn test_unreadable_source_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("icon_1024x1024.png");
    std::fs::write(&source_path, b"not a png").unwrap();

    let err = load_source(&source_path).unwrap_err();
    assert!(format!("{:#}", err).contains("icon_1024x1024.png"));
}
