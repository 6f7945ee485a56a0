//! Default routing distances (in the caller's coordinate units, usually px)

/// Clearance left between the end of a connector and the target edge,
/// so an arrow head drawn there doesn't overlap the box.
pub const LINE_OFFSET: f64 = 9.0;

/// Horizontal slack when deciding whether two boxes are stacked closely
/// enough to be joined top/bottom.
pub const Y_ALIGNMENT_MARGIN: f64 = 40.0;
