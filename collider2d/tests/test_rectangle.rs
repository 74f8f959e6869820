use collider2d::{
    collider::{Collider, LinePieceCollider, RectangleCollider},
    core::math::Vector2,
    AABB,
};

fn rect(x: f64, y: f64, w: f64, h: f64) -> RectangleCollider {
    RectangleCollider::new(Vector2::new(x, y), Vector2::new(w, h))
}

fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> LinePieceCollider {
    LinePieceCollider::new(Vector2::new(x0, y0), Vector2::new(x1, y1))
}

#[test]
fn overlapping_rectangles() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    let b = rect(5.0, 5.0, 10.0, 10.0);
    let c = rect(20.0, 20.0, 5.0, 5.0);
    assert!(a.intersects_rectangle(&b));
    assert!(b.intersects_rectangle(&a));
    assert!(!a.intersects_rectangle(&c));
    assert!(!c.intersects_rectangle(&a));
}

#[test]
fn rectangles_separated_on_one_axis_only() {
    let a = rect(0.0, 0.0, 10.0, 10.0);
    // overlaps horizontally, gap vertically
    let below = rect(2.0, 11.0, 3.0, 3.0);
    // overlaps vertically, gap horizontally
    let beside = rect(-5.0, 2.0, 4.0, 3.0);
    assert!(!a.intersects_rectangle(&below));
    assert!(!a.intersects_rectangle(&beside));
}

#[test]
fn nested_rectangles_overlap() {
    let outer = rect(0.0, 0.0, 10.0, 10.0);
    let inner = rect(2.0, 2.0, 1.0, 1.0);
    assert!(outer.intersects_rectangle(&inner));
    assert!(inner.intersects_rectangle(&outer));
}

#[test]
fn segment_inside_rectangle() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let line = seg(2.0, 2.0, 8.0, 3.0);
    assert!(line.intersects_rectangle(&r));
    assert!(r.intersects_line(&line));
}

#[test]
fn segment_with_one_end_inside() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let line = seg(5.0, 5.0, 25.0, -30.0);
    assert!(line.intersects_rectangle(&r));
    assert!(r.intersects_line(&line));
}

#[test]
fn segment_crossing_parallel_to_sides() {
    // parallel to top and bottom, crosses left and right, the parallel sides are skipped
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let horizontal = seg(-5.0, 5.0, 15.0, 5.0);
    let vertical = seg(5.0, -5.0, 5.0, 15.0);
    assert!(horizontal.intersects_rectangle(&r));
    assert!(r.intersects_line(&horizontal));
    assert!(vertical.intersects_rectangle(&r));
    assert!(r.intersects_line(&vertical));
}

#[test]
fn segment_crossing_diagonally() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let line = seg(-5.0, 2.0, 15.0, 8.0);
    assert!(line.intersects_rectangle(&r));
    assert!(r.intersects_line(&line));
}

#[test]
fn segment_through_opposite_corners() {
    // crossings land exactly on the corners where two sides meet
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let diagonal = seg(-5.0, -5.0, 15.0, 15.0);
    let anti_diagonal = seg(-5.0, 15.0, 15.0, -5.0);
    assert!(diagonal.intersects_rectangle(&r));
    assert!(r.intersects_line(&diagonal));
    assert!(anti_diagonal.intersects_rectangle(&r));
    assert!(r.intersects_line(&anti_diagonal));
}

#[test]
fn segment_along_edge() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let along_top = seg(-5.0, 0.0, 15.0, 0.0);
    let along_right = seg(10.0, -5.0, 10.0, 15.0);
    assert!(along_top.intersects_rectangle(&r));
    assert!(r.intersects_line(&along_top));
    assert!(along_right.intersects_rectangle(&r));
    assert!(r.intersects_line(&along_right));
}

#[test]
fn segment_touching_only_a_corner() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let touching = seg(-5.0, 5.0, 5.0, -5.0);
    assert!(touching.intersects_rectangle(&r));
    let missing = seg(-5.0, 4.9, 4.9, -5.0);
    assert!(!missing.intersects_rectangle(&r));
}

#[test]
fn segment_passing_by() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let line = seg(-5.0, -5.0, -1.0, 20.0);
    assert!(!line.intersects_rectangle(&r));
    assert!(!r.intersects_line(&line));

    let above = seg(-5.0, -1.0, 15.0, -1.0);
    assert!(!above.intersects_rectangle(&r));
}

#[test]
fn segment_ending_on_edge_is_contained() {
    let r = rect(0.0, 0.0, 10.0, 10.0);
    let line = seg(-5.0, 5.0, 0.0, 5.0);
    assert!(line.intersects_rectangle(&r));
}

#[test]
fn bounding_box_is_self() {
    let r = rect(3.0, -4.0, 2.0, 6.0);
    assert_eq!(r.bounding_box(), r);
}

#[test]
fn zero_size_rectangle_is_a_point() {
    let point = rect(5.0, 5.0, 0.0, 0.0);
    assert!(point.contains(Vector2::new(5.0, 5.0)));
    assert!(!point.contains(Vector2::new(5.0, 5.1)));
    assert!(point.intersects_rectangle(&rect(0.0, 0.0, 10.0, 10.0)));
    assert!(!point.intersects_rectangle(&rect(6.0, 6.0, 1.0, 1.0)));
}

#[test]
fn aabb_round_trip() {
    let aabb = AABB::new(-1.0, 2.0, 3.0, 7.0);
    let r = RectangleCollider::from(aabb);
    assert_eq!(r, rect(-1.0, 2.0, 4.0, 5.0));
    let back = r.to_aabb();
    assert_eq!(back.min_x, -1.0);
    assert_eq!(back.min_y, 2.0);
    assert_eq!(back.max_x, 3.0);
    assert_eq!(back.max_y, 7.0);
}
