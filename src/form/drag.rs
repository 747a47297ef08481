//! Drag-to-reorder gesture state machine

/// A committed drag: move the question at `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

/// Where a drag gesture currently stands.
///
/// Hovering is purely visual; only a release over a target yields a
/// [`ReorderRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
        over: Option<usize>,
    },
    Dropped(ReorderRequest),
}

/// Tracks one pointer or keyboard drag at a time
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    state: DragState,
}

impl DragGesture {
    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Source position of the active drag, if any
    pub fn source(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Drop target currently hovered, if any
    pub fn target(&self) -> Option<usize> {
        match self.state {
            DragState::Dragging { over, .. } => over,
            _ => None,
        }
    }

    /// Pick up the question at `source`. Ignored while a drag is active.
    pub fn start(&mut self, source: usize) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging {
            source,
            over: Some(source),
        };
        tracing::debug!(source, "drag started");
        true
    }

    /// Update the hovered drop target; `None` means outside any target
    pub fn hover(&mut self, target: Option<usize>) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = target;
        }
    }

    /// Release the dragged question.
    ///
    /// Returns the move to apply when released over a target; otherwise the
    /// gesture falls back to idle and nothing is returned.
    pub fn release(&mut self) -> Option<ReorderRequest> {
        let DragState::Dragging { source, over } = self.state else {
            return None;
        };
        match over {
            Some(to) => {
                let request = ReorderRequest { from: source, to };
                self.state = DragState::Dropped(request);
                tracing::debug!(from = source, to, "drag dropped");
                Some(request)
            }
            None => {
                self.state = DragState::Idle;
                tracing::debug!(source, "drag released outside any target");
                None
            }
        }
    }

    /// Abandon the gesture (Esc, focus loss) without producing a move
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            tracing::debug!("drag cancelled");
        }
        self.state = DragState::Idle;
    }

    /// Return to idle after a drop has been handled
    pub fn reset(&mut self) {
        if matches!(self.state, DragState::Dropped(_)) {
            self.state = DragState::Idle;
        }
    }
}
