//! Implicit balanced binary search tree over a sorted section array.
//!
//! Each section stores two indices: `next_index`, the root of the subtree of sections above
//! it, and `prev_index`, the root of the subtree below it. Roots are integer midpoints, so the
//! tree needs no node allocation and survives copying the array. A side with no subtree links
//! back to the section itself.

use crate::cubic_section::CubicSection;

/// Entry point of every search over `number_of_sections` sections.
pub(crate) fn center_index(number_of_sections: usize) -> usize {
    number_of_sections.saturating_sub(1) / 2
}

/// Links `sections` into a tree rooted at [center_index] and returns that root.
pub(crate) fn link_sections(sections: &mut [CubicSection]) -> usize {
    for (index, section) in sections.iter_mut().enumerate() {
        section.next_index = index;
        section.prev_index = index;
    }

    let center = center_index(sections.len());
    if let Some(upper_index) = sections.len().checked_sub(1) {
        set_next_prev_indices(sections, upper_index, 0, center);
    }
    center
}

// Recurses into the lower subrange only; the upper subrange is walked by the loop, so stack
// depth stays logarithmic in the section count.
fn set_next_prev_indices(
    sections: &mut [CubicSection],
    upper_index: usize,
    mut lower_index: usize,
    mut cur_index: usize,
) {
    while lower_index < upper_index {
        let next_index = (upper_index + cur_index + 1) / 2;
        sections[cur_index].next_index = next_index;

        if cur_index > lower_index {
            let prev_index = (lower_index + cur_index - 1) / 2;
            sections[cur_index].prev_index = prev_index;
            set_next_prev_indices(sections, cur_index - 1, lower_index, prev_index);
        }

        lower_index = cur_index + 1;
        cur_index = next_index;
    }
}
