//! Point list with linear undo/redo.
//!
//! Every click pushes an [`Action`] onto the undo stack and clears the redo
//! stack, so history never branches.

use super::measurement::Point;

/// A recorded user action. Only point additions exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Add(Point),
}

impl Action {
    pub fn point(&self) -> Point {
        match self {
            Action::Add(p) => *p,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeasurementLog {
    points: Vec<Point>,
    undo_stack: Vec<Action>,
    redo_stack: Vec<Action>,
}

impl MeasurementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly clicked point. Invalidates any redo history.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
        self.undo_stack.push(Action::Add(point));
        self.redo_stack.clear();
    }

    /// Move the newest action to the redo stack. Returns `false` when there is
    /// nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(action) = self.undo_stack.pop() else {
            return false;
        };
        match action {
            // The newest undo entry always belongs to the newest point.
            Action::Add(_) => {
                self.points.pop();
            }
        }
        self.redo_stack.push(action);
        true
    }

    /// Re-apply the most recently undone action. Returns `false` when the redo
    /// stack is empty.
    pub fn redo(&mut self) -> bool {
        let Some(action) = self.redo_stack.pop() else {
            return false;
        };
        match action {
            Action::Add(p) => self.points.push(p),
        }
        self.undo_stack.push(action);
        true
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn undo_stack(&self) -> &[Action] {
        &self.undo_stack
    }

    pub fn redo_stack(&self) -> &[Action] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
