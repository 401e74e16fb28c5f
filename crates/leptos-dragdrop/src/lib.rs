//! Leptos DragDrop Utilities
//!
//! Drag-to-reorder for vertical lists using mouse events.
//! Uses movement threshold to distinguish click from drag, and the
//! midpoint rule to decide where the dragged row lands.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Where a dragged row will be inserted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertionPoint {
    /// Before the row with this index
    Before(usize),
    /// After the last row
    End,
}

impl InsertionPoint {
    /// Translate into the destination index of a list move.
    ///
    /// The result indexes the list with the dragged row already removed,
    /// so it can be fed straight to a remove-then-insert move.
    pub fn target_index(self, from: usize, len: usize) -> usize {
        match self {
            InsertionPoint::Before(index) if index > from => index - 1,
            InsertionPoint::Before(index) => index,
            InsertionPoint::End => len.saturating_sub(1),
        }
    }
}

/// Vertical extent of a rendered row (viewport coordinates)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub index: usize,
    pub top: f64,
    pub height: f64,
}

impl Candidate {
    /// Distance from the row's midpoint; negative when the pointer is above it
    fn offset(&self, pointer_y: f64) -> f64 {
        pointer_y - (self.top + self.height / 2.0)
    }
}

/// Pick the row the dragged item should be placed before.
///
/// Among rows whose midpoint is below the pointer, the nearest one wins.
/// No such row means the item goes to the end.
pub fn insertion_point<I>(pointer_y: f64, candidates: I) -> InsertionPoint
where
    I: IntoIterator<Item = Candidate>,
{
    candidates
        .into_iter()
        .map(|c| (c.offset(pointer_y), c.index))
        .filter(|(offset, _)| *offset < 0.0)
        .fold(None, |closest: Option<(f64, usize)>, (offset, index)| match closest {
            Some((best, _)) if best >= offset => closest,
            _ => Some((offset, index)),
        })
        .map_or(InsertionPoint::End, |(_, index)| InsertionPoint::Before(index))
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub insertion_read: ReadSignal<Option<InsertionPoint>>,
    pub insertion_write: WriteSignal<Option<InsertionPoint>>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Attribute carrying a row's list index
pub const INDEX_ATTR: &str = "data-index";

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (insertion_read, insertion_write) = signal(None::<InsertionPoint>);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_read,
        dragging_write,
        insertion_read,
        insertion_write,
        pending_read,
        pending_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.insertion_write.set(None);
    dnd.pending_write.set(None);
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        // Buttons inside the row keep their click behaviour
        let on_button = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest("button").ok().flatten())
            .is_some();
        if on_button {
            return;
        }
        ev.prevent_default();
        dnd.pending_write.set(Some(index));
        dnd.start_x_write.set(ev.client_x());
        dnd.start_y_write.set(ev.client_y());
    }
}

/// Measure every rendered row matching `selector`, skipping the dragged one
pub fn measure_candidates(selector: &str, skip: usize) -> Vec<Candidate> {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = doc.query_selector_all(selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let index = el.get_attribute(INDEX_ATTR)?.parse::<usize>().ok()?;
            if index == skip {
                return None;
            }
            let rect = el.get_bounding_client_rect();
            Some(Candidate { index, top: rect.top(), height: rect.height() })
        })
        .collect()
}

/// Bind document mousemove: starts the drag past the threshold, then
/// tracks the insertion point among rows matching `selector`
pub fn bind_global_mousemove(dnd: DndSignals, selector: &'static str) {
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
            let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

            if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                dnd.dragging_write.set(pending);
            }
        }

        if let Some(dragged) = dnd.dragging_read.get_untracked() {
            let point = insertion_point(f64::from(ev.client_y()), measure_candidates(selector, dragged));
            if dnd.insertion_read.get_untracked() != Some(point) {
                dnd.insertion_write.set(Some(point));
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<F>(dnd: DndSignals, selector: &'static str, on_drop: F)
where
    F: Fn(usize, InsertionPoint) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let insertion = dnd.insertion_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag commits; a plain click leaves the list alone
        if let (Some(dragged), Some(point)) = (dragging, insertion) {
            on_drop(dragged, point);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd, selector);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(tops: &[(usize, f64)]) -> Vec<Candidate> {
        tops.iter()
            .map(|&(index, top)| Candidate { index, top, height: 40.0 })
            .collect()
    }

    #[test]
    fn test_pointer_above_first_row() {
        let candidates = rows(&[(0, 0.0), (1, 40.0), (2, 80.0)]);
        assert_eq!(insertion_point(5.0, candidates), InsertionPoint::Before(0));
    }

    #[test]
    fn test_nearest_row_below_pointer_wins() {
        // Midpoints at 20, 60, 100; pointer at 45 sits above rows 1 and 2
        let candidates = rows(&[(0, 0.0), (1, 40.0), (2, 80.0)]);
        assert_eq!(insertion_point(45.0, candidates), InsertionPoint::Before(1));
    }

    #[test]
    fn test_pointer_below_all_rows_appends() {
        let candidates = rows(&[(0, 0.0), (1, 40.0)]);
        assert_eq!(insertion_point(500.0, candidates), InsertionPoint::End);
    }

    #[test]
    fn test_exact_midpoint_is_not_above() {
        let candidates = rows(&[(0, 0.0), (1, 40.0)]);
        assert_eq!(insertion_point(20.0, candidates), InsertionPoint::Before(1));
    }

    #[test]
    fn test_no_candidates_appends() {
        assert_eq!(insertion_point(10.0, Vec::new()), InsertionPoint::End);
    }

    #[test]
    fn test_order_of_candidates_does_not_matter() {
        let candidates = rows(&[(2, 80.0), (0, 0.0), (1, 40.0)]);
        assert_eq!(insertion_point(30.0, candidates), InsertionPoint::Before(1));
    }

    #[test]
    fn test_target_index() {
        // Dragging row 0 of 4 to before row 2 lands at index 1 once removed
        assert_eq!(InsertionPoint::Before(2).target_index(0, 4), 1);
        // Dragging row 3 up before row 1 keeps index 1
        assert_eq!(InsertionPoint::Before(1).target_index(3, 4), 1);
        assert_eq!(InsertionPoint::End.target_index(1, 4), 3);
        assert_eq!(InsertionPoint::End.target_index(0, 0), 0);
    }
}
