#![forbid(unsafe_code)]

//! Layered attribute resolution.
//!
//! Every styled attribute is resolved the same way: walk an ordered list of
//! optional layers (explicit value, inherited style, ambient default) and take
//! the first one that is set.

use fadetext_render::cell::PackedRgba;

/// Return the first set layer, in order.
///
/// ```
/// use fadetext_style::first_set;
///
/// assert_eq!(first_set([None, Some(2), Some(3)]), Some(2));
/// assert_eq!(first_set::<u8, _>([None, None]), None);
/// ```
#[inline]
pub fn first_set<T, I>(layers: I) -> Option<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    layers.into_iter().flatten().next()
}

/// Resolve the effective text color.
///
/// Precedence: `explicit`, then the inherited `style` color, then the
/// `ambient` content color of the host theme.
#[inline]
pub fn resolve_color(
    explicit: Option<PackedRgba>,
    style: Option<PackedRgba>,
    ambient: PackedRgba,
) -> PackedRgba {
    first_set([explicit, style]).unwrap_or(ambient)
}
