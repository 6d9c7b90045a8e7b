//! Raised shadow for a dragged row.

pub const INACTIVE_SHADOW: &str = "0px 0px 0px rgba(0,0,0,0.8)";
pub const RAISED_SHADOW: &str = "5px 5px 10px rgba(0,0,0,0.3)";

/// `box-shadow` for a row at vertical drag offset `y`
pub fn raised_shadow(y: f64) -> &'static str {
    if y == 0.0 {
        INACTIVE_SHADOW
    } else {
        RAISED_SHADOW
    }
}

/// Inline style for a row displaced by the drag collaborator
pub fn row_style(offset: (f64, f64)) -> String {
    let (x, y) = offset;
    let lifted = if y == 0.0 && x == 0.0 { 0 } else { 1 };
    format!(
        "transform: translate({}px, {}px); box-shadow: {}; z-index: {};",
        x,
        y,
        raised_shadow(y),
        lifted
    )
}
