//! Translation of the slide strip, in percent of the strip's width.

/// Width of one slide as a percentage of the strip.
#[inline]
pub fn slide_step_percent(visible: usize) -> f32 {
    100.0 / visible.max(1) as f32
}

/// Settled translation for `index`: `-(index * 100 / visible)`.
#[inline]
pub fn settled_translation(index: usize, visible: usize) -> f32 {
    -(index as f32 * slide_step_percent(visible))
}

/// Translation the renderer should apply to the strip. The drag offset only
/// contributes while a drag is active.
pub fn translate_percent(
    index: usize,
    drag_offset_percent: f32,
    visible: usize,
    is_dragging: bool,
) -> f32 {
    let live = if is_dragging { drag_offset_percent } else { 0.0 };
    settled_translation(index, visible) + live
}
