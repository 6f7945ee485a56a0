//! SVG path data for each relation, pinned with inline snapshots.

use connpath::{Rect, route};

const FRAME: Rect = Rect::new(0.0, 0.0, 500.0, 500.0);

fn svg(source: Rect, target: Rect) -> String {
    route(&source, &target, &FRAME).svg_data()
}

#[test]
fn bottom_to_top() {
    insta::assert_snapshot!(
        svg(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(0.0, 50.0, 10.0, 10.0)),
        @"M5 10 L5 30 L5 30 L5 41"
    );
}

#[test]
fn top_to_bottom() {
    insta::assert_snapshot!(
        svg(Rect::new(100.0, 200.0, 40.0, 20.0), Rect::new(80.0, 0.0, 20.0, 100.0)),
        @"M120 200 L120 150 L90 150 L90 109"
    );
}

#[test]
fn right_to_left() {
    insta::assert_snapshot!(
        svg(Rect::new(300.0, 0.0, 50.0, 40.0), Rect::new(0.0, 100.0, 100.0, 20.0)),
        @"M300 20 L200 20 L200 110 L109 110"
    );
}

#[test]
fn left_to_right() {
    insta::assert_snapshot!(
        svg(Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(200.0, 0.0, 10.0, 30.0)),
        @"M10 5 L105 5 L105 15 L191 15"
    );
}

#[test]
fn overlapping_boxes_render_nothing() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    insta::assert_snapshot!(svg(a, a), @"");
}
