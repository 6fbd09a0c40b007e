use arcroi_algorithms::{
    count_selected, rasterize, AnnularSectorGeometry, MaskShape, Point, RoiConfig,
};
use ndarray::Array2;

fn mask_from_pixels(shape: MaskShape, pixels: &[(usize, usize)]) -> Array2<bool> {
    let mut mask = Array2::from_elem(shape.dim(), false);
    for &(x, y) in pixels {
        mask[[y, x]] = true;
    }
    mask
}

#[test]
fn test_quarter_ring_on_10x10() {
    let shape = MaskShape::new(10, 10);
    let geometry = AnnularSectorGeometry::new(1.0, 3.0, 0.0, 90.0);
    // 1 < d < 3 and 0 < angle < 90 around (5, 5): both offsets in {1, 2}
    let expected = mask_from_pixels(shape, &[(6, 6), (7, 6), (6, 7), (7, 7)]);

    for config in [RoiConfig::parity(), RoiConfig::corrected()] {
        for parallel in [true, false] {
            let config = config.with_parallel(parallel);
            let mask = rasterize(shape, Point::new(5.0, 5.0), &geometry, &config).unwrap();
            assert_eq!(mask, expected, "config {:?}", config);
        }
    }
}

#[test]
fn test_zero_outer_radius_is_all_false() {
    let shape = MaskShape::new(13, 7);
    let geometry = AnnularSectorGeometry::new(0.0, 0.0, 0.0, 90.0);
    for config in [RoiConfig::parity(), RoiConfig::corrected()] {
        let mask = rasterize(shape, Point::new(3.0, 3.0), &geometry, &config).unwrap();
        assert_eq!(mask.dim(), (7, 13));
        assert_eq!(count_selected(mask.view()), 0);
    }
}

#[test]
fn test_inverted_radii_are_empty() {
    let geometry = AnnularSectorGeometry::new(4.0, 2.0, -180.0, 360.0);
    let mask = rasterize(
        MaskShape::new(10, 10),
        Point::new(5.0, 5.0),
        &geometry,
        &RoiConfig::parity(),
    )
    .unwrap();
    assert_eq!(count_selected(mask.view()), 0);
}

#[test]
fn test_outer_radius_is_exclusive() {
    let shape = MaskShape::new(12, 12);
    let center = Point::new(5.0, 5.0);
    // (8, 9) is a 3-4-5 offset from the center: exactly 5 away
    let on_edge = AnnularSectorGeometry::new(0.0, 5.0, 0.0, 90.0);
    let mask = rasterize(shape, center, &on_edge, &RoiConfig::default()).unwrap();
    assert!(!mask[[9, 8]]);

    let wider = AnnularSectorGeometry::new(0.0, 5.5, 0.0, 90.0);
    let mask = rasterize(shape, center, &wider, &RoiConfig::default()).unwrap();
    assert!(mask[[9, 8]]);
}

#[test]
fn test_inner_radius_is_exclusive() {
    let shape = MaskShape::new(12, 12);
    let center = Point::new(5.0, 5.0);
    let geometry = AnnularSectorGeometry::new(5.0, 8.0, 0.0, 90.0);
    let mask = rasterize(shape, center, &geometry, &RoiConfig::default()).unwrap();
    assert!(!mask[[9, 8]]);
    assert!(mask[[10, 9]]);
}

#[test]
fn test_axis_pixels_excluded_by_angle() {
    let shape = MaskShape::new(10, 10);
    let geometry = AnnularSectorGeometry::new(0.5, 4.0, 0.0, 90.0);
    let mask = rasterize(shape, Point::new(5.0, 5.0), &geometry, &RoiConfig::default()).unwrap();
    for offset in 1..4 {
        // on the 0° ray
        assert!(!mask[[5, 5 + offset]]);
        // on the 90° ray
        assert!(!mask[[5 + offset, 5]]);
    }
    assert!(mask[[6, 6]]);
}

#[test]
fn test_full_ring_with_center_outside_image() {
    let shape = MaskShape::new(4, 4);
    let geometry = AnnularSectorGeometry::new(0.0, 3.5, -180.0, 360.0);
    let mask = rasterize(shape, Point::new(-1.0, -1.0), &geometry, &RoiConfig::parity()).unwrap();
    let expected = mask_from_pixels(shape, &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 0), (0, 2)]);
    assert_eq!(mask, expected);
}
