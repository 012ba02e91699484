use glam::Vec2;

/// Where a draggable shape sits inside its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShapePosition {
    /// Initial layout, as percentages of the container (top, left).
    Percent { top: f32, left: f32 },
    /// Placed by a drag, in px from the container's top-left corner.
    Px(Vec2),
}

impl ShapePosition {
    /// `(top, left)` CSS values.
    pub fn css(&self) -> (String, String) {
        match *self {
            ShapePosition::Percent { top, left } => (format!("{top}%"), format!("{left}%")),
            ShapePosition::Px(p) => (format!("{}px", p.y), format!("{}px", p.x)),
        }
    }
}

pub const INITIAL_SHAPES: [ShapePosition; 3] = [
    ShapePosition::Percent { top: 0.0, left: 20.0 },
    ShapePosition::Percent { top: 50.0, left: 0.0 },
    ShapePosition::Percent { top: 70.0, left: 75.0 },
];

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: Option<usize>,
    /// Pointer position inside the grabbed shape at mousedown.
    pub grab_offset: Vec2,
}

/// The "drag us" shapes in the about section.
#[derive(Clone, Debug)]
pub struct ShapeBoard {
    pub shapes: Vec<ShapePosition>,
    pub drag: DragState,
}

impl Default for ShapeBoard {
    fn default() -> Self {
        Self {
            shapes: INITIAL_SHAPES.to_vec(),
            drag: DragState::default(),
        }
    }
}

impl ShapeBoard {
    /// Mousedown on shape `index`; `pointer` and `shape_origin` in client px.
    pub fn grab(&mut self, index: usize, pointer: Vec2, shape_origin: Vec2) -> bool {
        if index >= self.shapes.len() {
            return false;
        }
        self.drag = DragState {
            active: Some(index),
            grab_offset: pointer - shape_origin,
        };
        true
    }

    /// Window mousemove while dragging. Returns the moved shape, if any.
    pub fn drag_to(&mut self, pointer: Vec2, container_origin: Vec2) -> Option<(usize, ShapePosition)> {
        let index = self.drag.active?;
        let pos = ShapePosition::Px(pointer - container_origin - self.drag.grab_offset);
        self.shapes[index] = pos;
        Some((index, pos))
    }

    pub fn release(&mut self) -> Option<usize> {
        let released = self.drag.active;
        self.drag = DragState::default();
        released
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.active.is_some()
    }
}
