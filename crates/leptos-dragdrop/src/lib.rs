//! Leptos DragDrop Utilities
//!
//! Vertical drag-to-reorder for Leptos lists using mouse and touch events.
//! A row has to be armed (its handle hovered or touched) before a press can
//! become a drag. A movement threshold separates clicks from drags and picks
//! the axis the gesture stays locked to.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Dominant direction of a drag gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Tuning for drag gestures, all in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragOptions {
    /// Movement needed before a press becomes a drag
    pub threshold_px: f64,
    /// Maximum sideways travel of the dragged row
    pub max_lateral_px: f64,
    /// Height of one row, used to turn an offset into a row shift
    pub row_height_px: f64,
}

impl Default for DragOptions {
    fn default() -> Self {
        Self {
            threshold_px: 5.0,
            max_lateral_px: 8.0,
            row_height_px: 44.0,
        }
    }
}

/// Pick the locked axis once movement passes the threshold.
/// Ties go to vertical since that is the reorder direction.
pub fn detect_axis(dx: f64, dy: f64, threshold: f64) -> Option<Axis> {
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax <= threshold && ay <= threshold {
        return None;
    }
    if ay >= ax {
        Some(Axis::Vertical)
    } else {
        Some(Axis::Horizontal)
    }
}

/// Offset to apply to the dragged element for raw pointer movement
pub fn constrain(dx: f64, dy: f64, axis: Axis, max_lateral: f64) -> (f64, f64) {
    let lateral = dx.clamp(-max_lateral, max_lateral);
    match axis {
        Axis::Vertical => (lateral, dy),
        Axis::Horizontal => (lateral, 0.0),
    }
}

/// Number of whole rows an offset covers (negative = upwards)
pub fn row_shift(offset_y: f64, row_height: f64) -> isize {
    if row_height <= 0.0 || !offset_y.is_finite() {
        return 0;
    }
    (offset_y / row_height).round() as isize
}

/// One press-move-release gesture on a row
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession<K> {
    pub id: K,
    start: (f64, f64),
    pub axis: Option<Axis>,
    pub offset: (f64, f64),
}

impl<K: Copy> DragSession<K> {
    pub fn new(id: K, x: f64, y: f64) -> Self {
        Self {
            id,
            start: (x, y),
            axis: None,
            offset: (0.0, 0.0),
        }
    }

    /// True once the press has turned into a drag
    pub fn is_dragging(&self) -> bool {
        self.axis.is_some()
    }

    /// Feed a pointer position. The axis is chosen once and never changes.
    pub fn move_to(&mut self, x: f64, y: f64, opts: &DragOptions) {
        let dx = x - self.start.0;
        let dy = y - self.start.1;
        if self.axis.is_none() {
            self.axis = detect_axis(dx, dy, opts.threshold_px);
        }
        if let Some(axis) = self.axis {
            self.offset = constrain(dx, dy, axis, opts.max_lateral_px);
        }
    }

    /// Reorder produced by releasing here: (id, row shift)
    pub fn release(&self, opts: &DragOptions) -> Option<(K, isize)> {
        if self.axis != Some(Axis::Vertical) {
            return None;
        }
        let shift = row_shift(self.offset.1, opts.row_height_px);
        (shift != 0).then_some((self.id, shift))
    }
}

/// DnD state signals
pub struct DragSignals<K: Copy + Send + Sync + 'static> {
    /// Row whose handle is currently hovered or touched
    pub armed_id_read: ReadSignal<Option<K>>,
    pub armed_id_write: WriteSignal<Option<K>>,
    /// Active gesture, if any
    pub session_read: ReadSignal<Option<DragSession<K>>>,
    pub session_write: WriteSignal<Option<DragSession<K>>>,
}

impl<K: Copy + Send + Sync + 'static> Clone for DragSignals<K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Copy + Send + Sync + 'static> Copy for DragSignals<K> {}

pub fn create_drag_signals<K: Copy + Send + Sync + 'static>() -> DragSignals<K> {
    let (armed_id_read, armed_id_write) = signal(None::<K>);
    let (session_read, session_write) = signal(None::<DragSession<K>>);
    DragSignals {
        armed_id_read,
        armed_id_write,
        session_read,
        session_write,
    }
}

/// Allow a press on this row to start a drag
pub fn arm<K: Copy + PartialEq + Send + Sync + 'static>(dnd: &DragSignals<K>, id: K) {
    dnd.armed_id_write.set(Some(id));
}

/// Withdraw the arming. A drag already in flight keeps going.
pub fn disarm<K: Copy + PartialEq + Send + Sync + 'static>(dnd: &DragSignals<K>, id: K) {
    if dnd.armed_id_read.get_untracked() == Some(id) {
        dnd.armed_id_write.set(None);
    }
}

/// Live (x, y) offset of a row, zero unless it is being dragged
pub fn offset_for<K: Copy + PartialEq + Send + Sync + 'static>(dnd: &DragSignals<K>, id: K) -> (f64, f64) {
    dnd.session_read
        .get()
        .filter(|s| s.id == id && s.is_dragging())
        .map(|s| s.offset)
        .unwrap_or((0.0, 0.0))
}

/// End drag operation
pub fn end_drag<K: Copy + Send + Sync + 'static>(dnd: &DragSignals<K>) {
    dnd.session_write.set(None);
    dnd.armed_id_write.set(None);
}

fn press<K: Copy + PartialEq + Send + Sync + 'static>(dnd: &DragSignals<K>, id: K, x: f64, y: f64) {
    if dnd.armed_id_read.get_untracked() != Some(id) {
        return;
    }
    dnd.session_write.set(Some(DragSession::new(id, x, y)));
}

fn pointer_moved<K: Copy + Send + Sync + 'static>(dnd: &DragSignals<K>, x: f64, y: f64, opts: &DragOptions) {
    if dnd.session_read.get_untracked().is_none() {
        return;
    }
    dnd.session_write.update(|session| {
        if let Some(s) = session {
            s.move_to(x, y, opts);
        }
    });
}

fn pointer_released<K, F>(dnd: &DragSignals<K>, opts: &DragOptions, on_reorder: &F)
where
    K: Copy + Send + Sync + 'static,
    F: Fn(K, isize),
{
    let Some(session) = dnd.session_read.get_untracked() else { return; };
    let outcome = session.release(opts);
    end_drag(dnd);
    if let Some((id, shift)) = outcome {
        on_reorder(id, shift);
    }
}

/// Create mousedown handler for a row.
/// Only left presses on an armed row start a gesture; presses on inputs
/// and buttons are left to those elements.
pub fn make_on_mousedown<K>(dnd: DragSignals<K>, id: K) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        press(&dnd, id, ev.client_x() as f64, ev.client_y() as f64);
    }
}

/// Create touchstart handler for a drag handle.
/// Touch has no hover, so touching the handle arms the row and presses it.
pub fn make_on_touchstart<K>(dnd: DragSignals<K>, id: K) -> impl Fn(web_sys::TouchEvent) + Copy + 'static
where
    K: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::TouchEvent| {
        arm(&dnd, id);
        if let Some(touch) = ev.touches().get(0) {
            press(&dnd, id, touch.client_x() as f64, touch.client_y() as f64);
        }
    }
}

fn listen(event: &str, handler: &wasm_bindgen::JsValue) {
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let _ = doc.add_event_listener_with_callback(event, handler.unchecked_ref());
    }
}

/// Bind document-level move/release handlers for mouse and touch.
/// `on_reorder` receives the dragged id and how many rows it moved.
pub fn bind_global_listeners<K, F>(dnd: DragSignals<K>, opts: DragOptions, on_reorder: F)
where
    K: Copy + Send + Sync + 'static,
    F: Fn(K, isize) + Clone + 'static,
{
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        pointer_moved(&dnd, ev.client_x() as f64, ev.client_y() as f64, &opts);
    });
    listen("mousemove", on_mousemove.as_ref());
    on_mousemove.forget();

    let on_touchmove = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |ev: web_sys::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            pointer_moved(&dnd, touch.client_x() as f64, touch.client_y() as f64, &opts);
        }
    });
    listen("touchmove", on_touchmove.as_ref());
    on_touchmove.forget();

    let on_mouse_reorder = on_reorder.clone();
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        pointer_released(&dnd, &opts, &on_mouse_reorder);
    });
    listen("mouseup", on_mouseup.as_ref());
    on_mouseup.forget();

    let on_touchend = Closure::<dyn FnMut(web_sys::TouchEvent)>::new(move |_ev: web_sys::TouchEvent| {
        pointer_released(&dnd, &opts, &on_reorder);
    });
    listen("touchend", on_touchend.as_ref());
    on_touchend.forget();
}
