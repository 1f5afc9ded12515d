use super::*;

mod mapping {
  use super::*;

  fn mapper(view_box: ViewBox, width: u32, height: u32) -> CoordinateMapper {
    CoordinateMapper::new(view_box, width, height).unwrap()
  }

  #[test]
  fn corners_map_to_surface_corners() {
    let boxes = [
      ViewBox::new(-10.0, 10.0, -10.0, 10.0),
      ViewBox::new(-0.3, 0.7, 0.1, 0.4),
      ViewBox::new(2.0, 1002.0, -3.5, 17.25),
    ];
    for view_box in boxes {
      let m = mapper(view_box, 800, 600);
      assert_eq!(m.to_pixel(view_box.min_x, view_box.min_y), (0.0, 600.0));
      assert_eq!(m.to_pixel(view_box.max_x, view_box.max_y), (800.0, 0.0));
    }
  }

  #[test]
  fn y_axis_is_flipped() {
    let m = mapper(ViewBox::new(0.0, 10.0, 0.0, 10.0), 100, 100);
    let (_, low) = m.to_pixel(0.0, 2.0);
    let (_, high) = m.to_pixel(0.0, 8.0);
    assert!(high < low);
  }

  #[test]
  fn origin_of_symmetric_box_is_center() {
    let m = mapper(ViewBox::default(), 800, 600);
    assert_eq!(m.to_pixel(0.0, 0.0), (400.0, 300.0));
  }

  #[test]
  fn column_to_math_x() {
    let m = mapper(ViewBox::default(), 800, 600);
    assert_eq!(m.to_math_x(0.0), -10.0);
    assert_eq!(m.to_math_x(400.0), 0.0);
    assert_eq!(m.to_math_x(800.0), 10.0);
  }

  #[test]
  fn degenerate_box_is_a_config_error() {
    assert!(matches!(
      CoordinateMapper::new(ViewBox::new(2.0, 2.0, 0.0, 1.0), 10, 10),
      Err(ConfigError::DegenerateViewBox { .. })
    ));
    assert!(matches!(
      CoordinateMapper::new(ViewBox::new(0.0, f64::INFINITY, 0.0, 1.0), 10, 10),
      Err(ConfigError::DegenerateViewBox { .. })
    ));
    assert!(matches!(
      CoordinateMapper::new(ViewBox::new(0.0, 1.0, -f64::MAX, f64::MAX), 10, 10),
      Err(ConfigError::DegenerateViewBox { .. })
    ));
  }
}
