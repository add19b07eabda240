//! Padding/margin side resolution and shorthand assembly

use crate::model::dimension::format_number;
use crate::model::StyleBag;

/// Four resolved box sides in CSS order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSides {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl BoxSides {
    pub const fn uniform(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Vertical/horizontal pair, like the two-value CSS shorthand
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `10px` when all sides agree, `top right bottom left` otherwise
    pub fn to_css(&self) -> String {
        if self.is_uniform() {
            format!("{}px", format_number(self.top))
        } else {
            format!(
                "{}px {}px {}px {}px",
                format_number(self.top),
                format_number(self.right),
                format_number(self.bottom),
                format_number(self.left)
            )
        }
    }

    fn side(&self, i: usize) -> f64 {
        match i {
            0 => self.top,
            1 => self.right,
            2 => self.bottom,
            _ => self.left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SideProperty {
    Padding,
    Margin,
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|n| n.is_finite())
}

fn values(bag: &StyleBag, prop: SideProperty) -> (Option<f64>, [Option<f64>; 4]) {
    match prop {
        SideProperty::Padding => (
            finite(bag.padding),
            [
                finite(bag.padding_top),
                finite(bag.padding_right),
                finite(bag.padding_bottom),
                finite(bag.padding_left),
            ],
        ),
        SideProperty::Margin => (
            finite(bag.margin),
            [
                finite(bag.margin_top),
                finite(bag.margin_right),
                finite(bag.margin_bottom),
                finite(bag.margin_left),
            ],
        ),
    }
}

/// Resolve each side independently through `levels` (most specific first).
///
/// At every level a directional value wins over that level's uniform value;
/// only when both are absent does the next level get consulted.
pub(crate) fn resolve_sides(levels: &[&StyleBag], prop: SideProperty, default: BoxSides) -> BoxSides {
    let per_level: Vec<_> = levels.iter().map(|bag| values(bag, prop)).collect();
    let pick = |i: usize| {
        per_level
            .iter()
            .find_map(|(uniform, sides)| sides[i].or(*uniform))
            .unwrap_or_else(|| default.side(i))
    };
    BoxSides::new(pick(0), pick(1), pick(2), pick(3))
}
